//! Rotor: a keyed bijective substitution wheel.
//!
//! A rotor substitutes through its forward table on the way toward the
//! reflector and through the exact inverse on the way back. Repositioning
//! physically rotates the forward table's output ring in place — every
//! entry advances by the position delta — while the inverse table stays
//! fixed; the return pass compensates by shifting its input backward by the
//! cipher index, so the return substitution is always the true inverse of
//! the forward one.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::wheel::{CipherWheel, Neighbor, WheelState};
use crate::wiring;

/// A cipher wheel performing a keyed one-to-one substitution, chained to a
/// neighbor on each side and traversed twice per symbol.
///
/// # Examples
///
/// ```
/// use enigma96::{Alphabet, CipherWheel, Rotor};
///
/// let mut rotor = Rotor::new(1, Alphabet::default());
/// rotor.initialize("ThisIsASimpleSeedString").unwrap();
/// assert_eq!(rotor.cipher_index(), 0);
///
/// let (substituted, _carry) = rotor.transform_forward(42, true).unwrap();
/// let restored = rotor.transform_return(substituted).unwrap();
/// assert_eq!(restored, 42);
/// ```
pub struct Rotor {
    state: WheelState,
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
    left: Option<Neighbor>,
    right: Option<Neighbor>,
    awaiting_return: bool,
}

impl Rotor {
    /// Creates an unkeyed rotor with the given step cadence.
    ///
    /// The cycle size is fixed for the rotor's lifetime (clamped to
    /// `[0, 95]`). Call [`initialize`](CipherWheel::initialize) before use.
    ///
    /// # Parameters
    /// - `cycle_size`: Steps between rotations (0 = never, 1 = every symbol).
    /// - `alphabet`: The alphabet defining the substitution domain.
    pub fn new(cycle_size: usize, alphabet: Alphabet) -> Self {
        Rotor {
            state: WheelState::new(cycle_size, alphabet.table_size()),
            alphabet,
            forward: Vec::new(),
            inverse: Vec::new(),
            left: None,
            right: None,
            awaiting_return: false,
        }
    }

    /// Attaches the left neighbor. May be called exactly once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::AlreadyConnected`] if the left side is
    /// already attached.
    pub fn connect_left(&mut self, neighbor: Neighbor) -> Result<(), EnigmaError> {
        if self.left.is_some() {
            return Err(EnigmaError::AlreadyConnected);
        }
        self.left = Some(neighbor);
        Ok(())
    }

    /// Attaches the right neighbor. May be called exactly once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::AlreadyConnected`] if the right side is
    /// already attached.
    pub fn connect_right(&mut self, neighbor: Neighbor) -> Result<(), EnigmaError> {
        if self.right.is_some() {
            return Err(EnigmaError::AlreadyConnected);
        }
        self.right = Some(neighbor);
        Ok(())
    }

    /// Returns the left neighbor, if attached.
    pub fn left(&self) -> Option<Neighbor> {
        self.left
    }

    /// Returns the right neighbor, if attached.
    pub fn right(&self) -> Option<Neighbor> {
        self.right
    }

    /// Substitutes an index on the way toward the reflector.
    ///
    /// When `should_step` is set the rotor first answers a step request,
    /// possibly advancing its cipher index. The returned carry — true when
    /// the index wrapped to 0 — governs whether the next wheel in the chain
    /// steps, not the original `should_step`. A matching
    /// [`transform_return`](Self::transform_return) is expected afterward.
    ///
    /// # Parameters
    /// - `index`: The incoming alphabet index.
    /// - `should_step`: Whether the upstream wheel requested a step.
    ///
    /// # Returns
    /// The substituted index and the odometer carry for the next wheel.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInitialized`] before keying.
    pub fn transform_forward(
        &mut self,
        index: usize,
        should_step: bool,
    ) -> Result<(usize, bool), EnigmaError> {
        self.state.require_initialized()?;

        let carry = if should_step {
            let outcome = self.state.advance();
            if outcome.rotated {
                self.rotate_forward(1);
            }
            outcome.wrapped
        } else {
            false
        };

        let substituted = self.forward[index % self.alphabet.table_size()];
        self.awaiting_return = true;
        Ok((substituted, carry))
    }

    /// Substitutes an index on the way back from the reflector.
    ///
    /// Shifts the index backward by the cipher index before the inverse
    /// lookup, undoing the forward table's physical rotation. Must follow a
    /// forward pass on this rotor.
    ///
    /// # Parameters
    /// - `index`: The index returning from the right-hand side.
    ///
    /// # Returns
    /// The inverse-substituted index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReturnWithoutForward`] when no forward pass
    /// is pending.
    pub fn transform_return(&mut self, index: usize) -> Result<usize, EnigmaError> {
        if !self.awaiting_return {
            return Err(EnigmaError::ReturnWithoutForward);
        }

        let size = self.alphabet.table_size();
        let adjusted = (index % size + size - self.state.cipher_index()) % size;
        self.awaiting_return = false;
        Ok(self.inverse[adjusted])
    }

    /// Rotates the forward table's output ring by `delta` slots.
    fn rotate_forward(&mut self, delta: usize) {
        let size = self.alphabet.table_size();
        for entry in self.forward.iter_mut() {
            *entry = (*entry + delta) % size;
        }
    }
}

impl CipherWheel for Rotor {
    fn initialize(&mut self, seed: &str) -> Result<(), EnigmaError> {
        let wiring = wiring::generate_rotor(seed, &self.alphabet)?;
        self.forward = wiring.forward;
        self.inverse = wiring.inverse;
        self.state.mark_initialized();
        self.awaiting_return = false;
        Ok(())
    }

    fn set_index(&mut self, value: usize) -> Result<(), EnigmaError> {
        let delta = self.state.set_index(value)?;
        if delta != 0 {
            self.rotate_forward(delta);
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

impl Drop for Rotor {
    /// Clears the keyed wiring on drop.
    fn drop(&mut self) {
        for entry in self.forward.iter_mut() {
            *entry = 0;
        }
        for entry in self.inverse.iter_mut() {
            *entry = 0;
        }
    }
}
