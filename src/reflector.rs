//! Reflector: the keyed involution terminating the chain.
//!
//! The reflector substitutes through a fixed-point-free involution and
//! turns the signal back toward the rotors. Because the table is its own
//! inverse, reflection has no separate return entry point. Repositioning
//! rotates the whole disc — both contact sides — which conjugates the
//! involution by the rotation and so preserves both the involution and its
//! freedom from fixed points at every position.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::wheel::{CipherWheel, WheelState};
use crate::wiring;

/// A cipher wheel performing a keyed fixed-point-free involution,
/// terminating the chain and turning the signal around.
///
/// # Examples
///
/// ```
/// use enigma96::{Alphabet, CipherWheel, Reflector};
///
/// let mut reflector = Reflector::new(0, Alphabet::default());
/// reflector.initialize("ThisIsASimpleSeedString").unwrap();
///
/// let reflected = reflector.transform_forward(42, false).unwrap();
/// assert_ne!(reflected, 42);
/// assert_eq!(reflector.transform_forward(reflected, false).unwrap(), 42);
/// ```
pub struct Reflector {
    state: WheelState,
    alphabet: Alphabet,
    table: Vec<usize>,
    outgoing: Option<usize>,
}

impl Reflector {
    /// Creates an unkeyed reflector with the given step cadence.
    ///
    /// Reflectors are normally held still (`cycle_size` 0) or stepped only
    /// by a carry from the last rotor; the cadence mechanism itself is the
    /// same as a rotor's. Call [`initialize`](CipherWheel::initialize)
    /// before use.
    pub fn new(cycle_size: usize, alphabet: Alphabet) -> Self {
        Reflector {
            state: WheelState::new(cycle_size, alphabet.table_size()),
            alphabet,
            table: Vec::new(),
            outgoing: None,
        }
    }

    /// Attaches the rotor that receives the reflected signal. May be
    /// called exactly once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::AlreadyConnected`] if already attached.
    pub fn connect_outgoing(&mut self, rotor: usize) -> Result<(), EnigmaError> {
        if self.outgoing.is_some() {
            return Err(EnigmaError::AlreadyConnected);
        }
        self.outgoing = Some(rotor);
        Ok(())
    }

    /// Returns the outgoing rotor, if attached.
    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    /// Reflects an index back toward the rotors.
    ///
    /// When `should_step` is set the reflector first answers a step request
    /// with the shared cadence mechanism. The lookup is self-inverse, so
    /// the caller routes the result straight into the outgoing rotor's
    /// return pass.
    ///
    /// # Parameters
    /// - `index`: The incoming alphabet index.
    /// - `should_step`: Whether the last rotor's carry requested a step.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInitialized`] before keying.
    pub fn transform_forward(
        &mut self,
        index: usize,
        should_step: bool,
    ) -> Result<usize, EnigmaError> {
        self.state.require_initialized()?;

        if should_step {
            let outcome = self.state.advance();
            if outcome.rotated {
                self.rotate_table(1);
            }
        }

        Ok(self.table[index % self.alphabet.table_size()])
    }

    /// Rotates the whole disc by `delta` slots: `table'[k] =
    /// table[(k + delta)] - delta`, all mod the table size.
    fn rotate_table(&mut self, delta: usize) {
        let size = self.alphabet.table_size();
        let rotated: Vec<usize> = (0..size)
            .map(|slot| (self.table[(slot + delta) % size] + size - delta) % size)
            .collect();
        self.table = rotated;
    }
}

impl CipherWheel for Reflector {
    fn initialize(&mut self, seed: &str) -> Result<(), EnigmaError> {
        self.table = wiring::generate_reflector(seed, &self.alphabet)?;
        self.state.mark_initialized();
        Ok(())
    }

    fn set_index(&mut self, value: usize) -> Result<(), EnigmaError> {
        let delta = self.state.set_index(value)?;
        if delta != 0 {
            self.rotate_table(delta);
        }
        Ok(())
    }

    fn cipher_index(&self) -> usize {
        self.state.cipher_index()
    }

    fn cycle_size(&self) -> usize {
        self.state.cycle_size()
    }

    fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }
}

impl Drop for Reflector {
    /// Clears the keyed table on drop.
    fn drop(&mut self) {
        for entry in self.table.iter_mut() {
            *entry = 0;
        }
    }
}
