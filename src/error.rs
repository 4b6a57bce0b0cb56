//! Error types for the enigma96 library.

use std::fmt;

/// Errors produced by the enigma96 library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Seed string is shorter than the 10-character minimum.
    SeedTooShort,
    /// Cipher index is outside the valid range [0, 95].
    IndexOutOfRange {
        /// The rejected index value.
        value: usize,
    },
    /// Wrong number of index values supplied to `set_indexes`.
    IndexCountMismatch {
        /// Required count (rotor count plus one for the reflector).
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },
    /// A wheel or machine was used before `initialize`.
    NotInitialized,
    /// A return pass was requested without a pending forward pass.
    ReturnWithoutForward,
    /// A chain side that is already connected was connected again.
    AlreadyConnected,
    /// The signal reached a wheel side with no neighbor attached.
    ChainNotConnected,
    /// A machine was constructed with zero rotors.
    EmptyRotorSet,
    /// The wiring generator found no free slot; slot tracking is corrupted.
    WiringExhausted,
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::SeedTooShort => {
                write!(f, "Seed must be at least 10 characters long")
            }
            EnigmaError::IndexOutOfRange { value } => {
                write!(f, "Cipher index {} is outside the valid range [0, 95]", value)
            }
            EnigmaError::IndexCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} index values (one per rotor plus the reflector), got {}",
                    expected, actual
                )
            }
            EnigmaError::NotInitialized => {
                write!(f, "Wheel or machine must be initialized with a seed first")
            }
            EnigmaError::ReturnWithoutForward => {
                write!(f, "Return pass requested without a pending forward pass")
            }
            EnigmaError::AlreadyConnected => {
                write!(f, "Chain side is already connected")
            }
            EnigmaError::ChainNotConnected => {
                write!(f, "Signal reached an unconnected chain side")
            }
            EnigmaError::EmptyRotorSet => {
                write!(f, "Machine requires at least one rotor")
            }
            EnigmaError::WiringExhausted => {
                write!(f, "Wiring generator found no free slot")
            }
        }
    }
}

impl std::error::Error for EnigmaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_seed_too_short() {
        let err = EnigmaError::SeedTooShort;
        assert_eq!(
            format!("{}", err),
            "Seed must be at least 10 characters long"
        );
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = EnigmaError::IndexOutOfRange { value: 96 };
        assert_eq!(
            format!("{}", err),
            "Cipher index 96 is outside the valid range [0, 95]"
        );
    }

    #[test]
    fn test_display_index_count_mismatch() {
        let err = EnigmaError::IndexCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Expected 4 index values (one per rotor plus the reflector), got 3"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EnigmaError::NotInitialized, EnigmaError::NotInitialized);
        assert_ne!(EnigmaError::NotInitialized, EnigmaError::AlreadyConnected);
        assert_ne!(
            EnigmaError::IndexOutOfRange { value: 96 },
            EnigmaError::IndexOutOfRange { value: 100 }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::IndexCountMismatch {
            expected: 5,
            actual: 2,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
