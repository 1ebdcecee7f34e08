//! # Error Types
//!
//! Errors raised while parsing shared value objects.

use thiserror::Error;

/// Errors that can occur when parsing an `Address` or `Hash` from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match the target type.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Byte length of the target type.
        expected: usize,
        /// Byte length decoded from the input.
        actual: usize,
    },
}
