//! # Error Types
//!
//! Every fallible operation in this crate returns [`RutError`]. Errors are
//! plain values handed back to the immediate caller; nothing here logs or
//! retries them.
//!
//! A check character that does not match is *not* an error for
//! [`validate`](crate::validate), which reports it as `Ok(false)`. Only the
//! validated [`Rut`](crate::Rut) constructor turns a mismatch into
//! [`RutError::CheckDigitMismatch`].

use thiserror::Error;

/// Errors produced while parsing, validating, or formatting a RUT.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RutError {
    /// The input had no body once separators and surrounding whitespace
    /// were removed.
    #[error("input must not be empty")]
    EmptyInput,

    /// The body contained something other than decimal digits.
    #[error("input ('{0}') must contain only digits")]
    InvalidInput(String),

    /// A numeric format selector outside the recognised set was supplied.
    #[error("unknown format option {code} for input '{input}'")]
    InvalidOption {
        /// The rejected selector.
        code: u8,
        /// The trimmed input, returned untouched.
        input: String,
    },

    /// The supplied check character does not match the body.
    #[error("check digit mismatch: expected '{expected}', found '{found}'")]
    CheckDigitMismatch {
        /// Check character computed from the body.
        expected: char,
        /// Check character supplied by the caller.
        found: char,
    },

    /// A generation range whose lower bound exceeds its upper bound.
    #[error("invalid generation range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound.
        min: u64,
        /// Upper bound.
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_carries_input() {
        let err = RutError::InvalidInput("15g#4z524".to_string());
        assert_eq!(err.to_string(), "input ('15g#4z524') must contain only digits");
    }

    #[test]
    fn invalid_option_message_carries_code_and_input() {
        let err = RutError::InvalidOption {
            code: 99,
            input: "18622178-8".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("18622178-8"));
    }

    #[test]
    fn mismatch_message_names_both_characters() {
        let err = RutError::CheckDigitMismatch {
            expected: '1',
            found: '3',
        };
        assert_eq!(err.to_string(), "check digit mismatch: expected '1', found '3'");
    }
}
