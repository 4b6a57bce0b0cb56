//! Shared cipher-wheel contract and stepping cadence.
//!
//! [`CipherWheel`] is the capability both wheel types implement: a keyed
//! wiring table, a rotational offset (the cipher index), and a step cadence.
//! The cadence arithmetic lives in [`WheelState`], which both `Rotor` and
//! `Reflector` embed; how a reposition rotates the wiring table is each
//! wheel type's own business.

use crate::error::EnigmaError;

/// Reference to a neighboring wheel in the machine's chain.
///
/// Chain adjacency is expressed as indices into the machine's rotor array
/// rather than mutual object references, so the bidirectional chain carries
/// no reference cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The rotor at this position in the machine's rotor array.
    Rotor(usize),
    /// The machine's reflector.
    Reflector,
}

/// Shared contract implemented by [`Rotor`](crate::Rotor) and
/// [`Reflector`](crate::Reflector).
pub trait CipherWheel {
    /// Generates fresh wiring from the seed and resets the wheel's position.
    ///
    /// May be called again later to re-key; doing so also resets the
    /// position to zero.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SeedTooShort`] for seeds under 10 characters.
    fn initialize(&mut self, seed: &str) -> Result<(), EnigmaError>;

    /// Repositions the wheel to the given cipher index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotInitialized`] before
    /// [`initialize`](Self::initialize), and
    /// [`EnigmaError::IndexOutOfRange`] for values outside `[0, 95]`.
    fn set_index(&mut self, value: usize) -> Result<(), EnigmaError>;

    /// Returns the wheel's current rotational offset in `[0, 95]`.
    fn cipher_index(&self) -> usize;

    /// Returns the wheel's step cadence (0 = never rotates, 1 = rotates on
    /// every symbol, k > 1 = rotates once every k symbols).
    fn cycle_size(&self) -> usize;

    /// Returns whether the wheel has been keyed.
    fn is_initialized(&self) -> bool;
}

/// Result of one step request on a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepOutcome {
    /// The cipher index advanced by one slot.
    pub(crate) rotated: bool,
    /// The cipher index wrapped to 0 — the odometer carry that steps the
    /// next wheel in the chain.
    pub(crate) wrapped: bool,
}

impl StepOutcome {
    const HELD: StepOutcome = StepOutcome {
        rotated: false,
        wrapped: false,
    };
}

/// Positional state and cadence counters shared by both wheel types.
#[derive(Debug, Clone)]
pub(crate) struct WheelState {
    cipher_index: usize,
    cycle_count: usize,
    cycle_size: usize,
    table_size: usize,
    initialized: bool,
}

impl WheelState {
    /// Creates the state for a wheel with the given cadence.
    ///
    /// The cycle size is fixed for the wheel's lifetime and clamped to
    /// `[0, table_size - 1]`.
    pub(crate) fn new(cycle_size: usize, table_size: usize) -> Self {
        WheelState {
            cipher_index: 0,
            cycle_count: 0,
            cycle_size: cycle_size.min(table_size - 1),
            table_size,
            initialized: false,
        }
    }

    /// Marks the wheel keyed and rewinds it to the zero position.
    pub(crate) fn mark_initialized(&mut self) {
        self.cipher_index = 0;
        self.cycle_count = 0;
        self.initialized = true;
    }

    pub(crate) fn require_initialized(&self) -> Result<(), EnigmaError> {
        if self.initialized {
            Ok(())
        } else {
            Err(EnigmaError::NotInitialized)
        }
    }

    /// Repositions to `value`, recomputing the cycle count so a resumed
    /// mid-cycle position is reproducible.
    ///
    /// # Returns
    /// The forward rotation delta from the previous position, for the owner
    /// to apply to its wiring table.
    pub(crate) fn set_index(&mut self, value: usize) -> Result<usize, EnigmaError> {
        self.require_initialized()?;
        if value >= self.table_size {
            return Err(EnigmaError::IndexOutOfRange { value });
        }

        let delta = (self.table_size + value - self.cipher_index) % self.table_size;
        self.cipher_index = value;
        self.cycle_count = if self.cycle_size < 2 || value < 2 {
            0
        } else {
            value % self.cycle_size
        };
        Ok(delta)
    }

    /// Answers one step request.
    ///
    /// Cycle size 0 never rotates; 1 rotates on every request; k > 1
    /// rotates on every k-th request. The outcome reports whether the
    /// cipher index advanced and whether it wrapped to 0.
    pub(crate) fn advance(&mut self) -> StepOutcome {
        match self.cycle_size {
            0 => StepOutcome::HELD,
            1 => {
                self.cycle_count = 0;
                self.rotate_once()
            }
            _ => {
                self.cycle_count += 1;
                if self.cycle_count >= self.cycle_size {
                    self.cycle_count = 0;
                    self.rotate_once()
                } else {
                    StepOutcome::HELD
                }
            }
        }
    }

    fn rotate_once(&mut self) -> StepOutcome {
        self.cipher_index = (self.cipher_index + 1) % self.table_size;
        StepOutcome {
            rotated: true,
            wrapped: self.cipher_index == 0,
        }
    }

    pub(crate) fn cipher_index(&self) -> usize {
        self.cipher_index
    }

    pub(crate) fn cycle_size(&self) -> usize {
        self.cycle_size
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }
}
