//! enigma96: rotor-and-reflector substitution cipher machine.
//!
//! A software emulation of an Enigma-style cipher machine, generalized to a
//! 96-symbol alphabet (the 95 printable ASCII symbols plus the line break)
//! and a variable number of rotors. A secret seed string deterministically
//! keys the wiring of every wheel; text is transformed symbol-by-symbol
//! through the chained signal path, with odometer-style stepping between
//! symbols.
//!
//! This is a mechanical-fidelity emulation, not a security-grade cipher:
//! the substitution alphabet is tiny and the wiring derivation is not
//! cryptographically reviewed.
//!
//! # Architecture
//!
//! ```text
//! Alphabet      (symbol ↔ dense index space of 96 slots)
//!     ↓
//! wiring        (seed → rotor bijections, reflector involution)
//!     ↓
//! Rotor         (keyed substitution, inverse on the return pass)
//!     ↕ chained left/right, odometer carries between wheels
//! Reflector     (fixed-point-free involution — turns the signal around)
//!     ↕
//! EnigmaMachine (owns the chain, keys it, drives the per-symbol pass)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt by resetting to the same starting position:
//!
//! ```
//! use enigma96::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::new(3).unwrap();
//! machine.initialize("ThisIsASimpleSeedString").unwrap();
//!
//! let ciphertext = machine.transform("HELLO").unwrap();
//! assert_ne!(ciphertext, "HELLO");
//!
//! machine.reset_indexes().unwrap();
//! assert_eq!(machine.transform(&ciphertext).unwrap(), "HELLO");
//! ```
//!
//! Start from custom wheel positions:
//!
//! ```
//! use enigma96::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::new(4).unwrap();
//! machine.initialize("ForGodSoLovedTheWorldThatHeGaveHisOnlyBegottenSon").unwrap();
//! machine.set_indexes(&[5, 10, 15, 20, 25]).unwrap();
//!
//! let ciphertext = machine.transform("The quick brown fox.").unwrap();
//!
//! machine.reset_indexes().unwrap();
//! assert_eq!(machine.transform(&ciphertext).unwrap(), "The quick brown fox.");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod wiring;

mod alphabet;
mod machine;
mod reflector;
mod rotor;
mod wheel;

pub use alphabet::Alphabet;
pub use machine::EnigmaMachine;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wheel::{CipherWheel, Neighbor};
