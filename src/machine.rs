//! EnigmaMachine: the rotor-chain orchestrator.
//!
//! Owns the ordered rotor array and the reflector, wires them into a chain
//! once at construction, keys them from a single seed, and drives the
//! forward-reflect-return pass for each input symbol. Chain adjacency is
//! held as arena-style indices into the rotor array, so the bidirectional
//! chain carries no reference cycles.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wheel::{CipherWheel, Neighbor};

/// Step cadences assigned round-robin to the wheels at construction.
///
/// Rotor 1 always gets cadence 1 (the chain's units wheel); the later
/// entries share no common factors, so wheel positions drift apart slowly.
const CYCLE_SIZES: [usize; 10] = [1, 11, 7, 17, 13, 23, 29, 37, 41, 47];

/// Rotor-and-reflector cipher machine over the 96-symbol alphabet.
///
/// # Architecture
///
/// ```text
/// symbol → Alphabet → rotor 1 → … → rotor N → Reflector
///                       ↑  (inverse tables)        │
///                       └──────────────────────────┘
/// ```
///
/// Each symbol travels the rotor chain forward, reflects, and travels back
/// through the inverse tables. Rotor 1 attempts to step on every symbol;
/// each later wheel steps only when its left neighbor's cipher index wraps
/// to 0 (odometer carry). Because the reflector is a fixed-point-free
/// involution, the whole machine is self-reciprocal: reset to the same
/// indexes, it decrypts its own output.
///
/// Not thread-safe by design: a transformation mutates wheel positions, so
/// one instance must not be shared without external mutual exclusion —
/// `&mut self` on [`transform`](Self::transform) lets the compiler enforce
/// what the design requires.
///
/// # Examples
///
/// ```
/// use enigma96::EnigmaMachine;
///
/// let mut machine = EnigmaMachine::new(3).unwrap();
/// machine.initialize("ThisIsASimpleSeedString").unwrap();
///
/// let ciphertext = machine.transform("HELLO").unwrap();
/// assert_ne!(ciphertext, "HELLO");
///
/// machine.reset_indexes().unwrap();
/// assert_eq!(machine.transform(&ciphertext).unwrap(), "HELLO");
/// ```
pub struct EnigmaMachine {
    alphabet: Alphabet,
    rotors: Vec<Rotor>,
    reflector: Reflector,
    initial_indexes: Vec<usize>,
    initialized: bool,
}

impl EnigmaMachine {
    /// Creates a machine with `rotor_count` rotors and one reflector.
    ///
    /// Cycle sizes come round-robin from the fixed cadence table; the
    /// reflector takes the next cadence after the last rotor. The chain is
    /// wired once here: rotor 1 has no left neighbor, each rotor's right
    /// neighbor is the next rotor, the last rotor's right neighbor is the
    /// reflector, and the reflector's outgoing neighbor is the last rotor.
    ///
    /// The intended rotor count is 1–8; bounding input to that range is the
    /// constructing collaborator's job, not the core's. Only an empty
    /// machine is rejected here.
    ///
    /// # Parameters
    /// - `rotor_count`: Number of rotors (at least 1).
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyRotorSet`] when `rotor_count` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma96::EnigmaMachine;
    ///
    /// let machine = EnigmaMachine::new(4).unwrap();
    /// assert_eq!(machine.rotor_count(), 4);
    /// assert!(!machine.is_initialized());
    /// ```
    pub fn new(rotor_count: usize) -> Result<Self, EnigmaError> {
        if rotor_count == 0 {
            return Err(EnigmaError::EmptyRotorSet);
        }

        let alphabet = Alphabet::default();
        let rotors: Vec<Rotor> = (0..rotor_count)
            .map(|i| Rotor::new(CYCLE_SIZES[i % CYCLE_SIZES.len()], alphabet))
            .collect();
        let reflector = Reflector::new(CYCLE_SIZES[rotor_count % CYCLE_SIZES.len()], alphabet);

        Self::assemble(rotors, reflector, alphabet)
    }

    /// Creates a machine from pre-built wheels.
    ///
    /// Accepts externally constructed rotors and reflector — for example
    /// wheels keyed with their own seeds or custom cadences — and performs
    /// the same one-time chain wiring as [`new`](Self::new). The wheels
    /// must arrive unwired; a pre-connected side fails the wiring step.
    /// The machine starts Keyed when every supplied wheel is already
    /// initialized, so externally keyed wiring is usable without a
    /// re-keying [`initialize`](Self::initialize) call.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyRotorSet`] for an empty rotor set and
    /// [`EnigmaError::AlreadyConnected`] when a supplied wheel is already
    /// wired.
    pub fn from_parts(rotors: Vec<Rotor>, reflector: Reflector) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::EmptyRotorSet);
        }
        Self::assemble(rotors, reflector, Alphabet::default())
    }

    /// Wires the chain links. Each link is set exactly once.
    fn assemble(
        mut rotors: Vec<Rotor>,
        mut reflector: Reflector,
        alphabet: Alphabet,
    ) -> Result<Self, EnigmaError> {
        let last = rotors.len() - 1;
        for i in 0..rotors.len() {
            if i > 0 {
                rotors[i].connect_left(Neighbor::Rotor(i - 1))?;
            }
            if i < last {
                rotors[i].connect_right(Neighbor::Rotor(i + 1))?;
            } else {
                rotors[i].connect_right(Neighbor::Reflector)?;
            }
        }
        reflector.connect_outgoing(last)?;

        let initialized =
            rotors.iter().all(|r| r.is_initialized()) && reflector.is_initialized();
        let snapshot_len = rotors.len() + 1;
        Ok(EnigmaMachine {
            alphabet,
            rotors,
            reflector,
            initial_indexes: vec![0; snapshot_len],
            initialized,
        })
    }

    /// Keys every wheel from one seed.
    ///
    /// The reflector is keyed with the seed directly; rotor `i` is keyed
    /// with a derived seed — the seed's characters re-ordered by a
    /// deterministic decimation keyed on `i + 2` — so each rotor gets a
    /// related but distinct wiring even from one short seed. Resets the
    /// initial-index snapshot to all zeros. May be called again to re-key.
    ///
    /// # Parameters
    /// - `seed`: The secret seed (minimum 10 characters).
    ///
    /// # Errors
    /// Returns [`EnigmaError::SeedTooShort`] for seeds under 10 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma96::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new(3).unwrap();
    /// assert!(machine.initialize("too short").is_err());
    /// assert!(machine.initialize("LongEnoughSeed").is_ok());
    /// ```
    pub fn initialize(&mut self, seed: &str) -> Result<(), EnigmaError> {
        self.reflector.initialize(seed)?;

        let chars: Vec<char> = seed.chars().collect();
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            let derived = derive_rotor_seed(&chars, i + 2);
            rotor.initialize(&derived)?;
        }

        self.initial_indexes = vec![0; self.rotors.len() + 1];
        self.initialized = true;
        Ok(())
    }

    /// Repositions every wheel and stores the positions as the new
    /// snapshot for [`reset_indexes`](Self::reset_indexes).
    ///
    /// # Parameters
    /// - `values`: One index per rotor (in chain order) plus one for the
    ///   reflector, last.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInitialized`] before keying,
    /// [`EnigmaError::IndexCountMismatch`] for the wrong arity, and
    /// [`EnigmaError::IndexOutOfRange`] for values outside `[0, 95]`.
    pub fn set_indexes(&mut self, values: &[usize]) -> Result<(), EnigmaError> {
        if !self.initialized {
            return Err(EnigmaError::NotInitialized);
        }
        let expected = self.rotors.len() + 1;
        if values.len() != expected {
            return Err(EnigmaError::IndexCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        // Reject the whole batch before moving any wheel.
        for &value in values {
            if value >= self.alphabet.table_size() {
                return Err(EnigmaError::IndexOutOfRange { value });
            }
        }

        self.initial_indexes = values.to_vec();
        self.apply_snapshot()
    }

    /// Rewinds every wheel to the stored snapshot.
    ///
    /// No-op before keying. Used to return to a known starting position,
    /// typically before decrypting what was encrypted from that position.
    pub fn reset_indexes(&mut self) -> Result<(), EnigmaError> {
        if !self.initialized {
            return Ok(());
        }
        self.apply_snapshot()
    }

    fn apply_snapshot(&mut self) -> Result<(), EnigmaError> {
        for (rotor, &value) in self.rotors.iter_mut().zip(&self.initial_indexes) {
            rotor.set_index(value)?;
        }
        self.reflector
            .set_index(self.initial_indexes[self.rotors.len()])
    }

    /// Transforms text through the machine, one symbol at a time.
    ///
    /// Carriage returns are silently dropped, line feeds travel as the 96th
    /// alphabet symbol and come back out as CRLF pairs, and any other
    /// out-of-alphabet character collapses to space. Symbols are processed
    /// strictly in input order — every symbol's pass moves rotor positions
    /// that the next symbol depends on.
    ///
    /// # Parameters
    /// - `text`: The text to transform.
    ///
    /// # Returns
    /// The transformed text.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInitialized`] before keying.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma96::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new(2).unwrap();
    /// machine.initialize("ThisIsASimpleSeedString").unwrap();
    /// let ciphertext = machine.transform("line one\r\nline two").unwrap();
    ///
    /// machine.reset_indexes().unwrap();
    /// let plaintext = machine.transform(&ciphertext).unwrap();
    /// assert_eq!(plaintext, "line one\r\nline two");
    /// ```
    pub fn transform(&mut self, text: &str) -> Result<String, EnigmaError> {
        if !self.initialized {
            return Err(EnigmaError::NotInitialized);
        }

        let mut out = String::with_capacity(text.len());
        for symbol in text.chars() {
            if symbol == '\r' {
                continue;
            }
            let index = self.alphabet.to_index(symbol);
            let transformed = self.pass_signal(index)?;
            self.alphabet.push_symbol(transformed, &mut out);
        }
        Ok(out)
    }

    /// Drives one symbol through the full forward-reflect-return pass.
    ///
    /// Rotor 1 always receives a step request; every later wheel receives
    /// the carry its left neighbor produced. The walk follows the wired
    /// neighbor links, so an unwired side surfaces as a chain error rather
    /// than silent truncation.
    fn pass_signal(&mut self, index: usize) -> Result<usize, EnigmaError> {
        let mut index = index;
        let mut step = true;

        let mut at = 0;
        loop {
            let (substituted, carry) = self.rotors[at].transform_forward(index, step)?;
            index = substituted;
            step = carry;
            match self.rotors[at].right() {
                Some(Neighbor::Rotor(next)) => at = next,
                Some(Neighbor::Reflector) => break,
                None => return Err(EnigmaError::ChainNotConnected),
            }
        }

        index = self.reflector.transform_forward(index, step)?;

        let mut at = match self.reflector.outgoing() {
            Some(rotor) => rotor,
            None => return Err(EnigmaError::ChainNotConnected),
        };
        loop {
            index = self.rotors[at].transform_return(index)?;
            match self.rotors[at].left() {
                Some(Neighbor::Rotor(previous)) => at = previous,
                Some(Neighbor::Reflector) => return Err(EnigmaError::ChainNotConnected),
                None => break,
            }
        }

        Ok(index)
    }

    /// Returns the number of rotors in the chain.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Returns whether the machine has been keyed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns every wheel's current cipher index, reflector last.
    ///
    /// Callers persist a session by capturing this snapshot and replaying
    /// it through [`set_indexes`](Self::set_indexes).
    pub fn indexes(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.rotors.iter().map(|r| r.cipher_index()).collect();
        positions.push(self.reflector.cipher_index());
        positions
    }
}

impl Drop for EnigmaMachine {
    /// Clears the positional snapshot on drop; the wheels clear their own
    /// wiring.
    fn drop(&mut self) {
        for entry in self.initial_indexes.iter_mut() {
            *entry = 0;
        }
    }
}

/// Re-orders the seed's characters by interleaved-stride decimation.
///
/// The starting stride equals `key`; each pass over the remaining
/// characters takes every stride-th one, and the stride decrements by one
/// per pass (floored at 1, which drains whatever remains). Every key yields
/// a permutation of the same characters, so each rotor's wiring is related
/// to but distinct from the reflector's.
fn derive_rotor_seed(chars: &[char], key: usize) -> String {
    let mut taken = vec![false; chars.len()];
    let mut out = String::with_capacity(chars.len());
    let mut stride = key.max(1);
    let mut remaining = chars.len();

    while remaining > 0 {
        let mut count = 0;
        for (j, &symbol) in chars.iter().enumerate() {
            if taken[j] {
                continue;
            }
            count += 1;
            if count == stride {
                out.push(symbol);
                taken[j] = true;
                remaining -= 1;
                count = 0;
            }
        }
        if stride > 1 {
            stride -= 1;
        }
    }
    out
}
