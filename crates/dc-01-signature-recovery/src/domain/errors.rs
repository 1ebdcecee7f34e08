//! # Signature Errors
//!
//! Error types for signer recovery.

use thiserror::Error;

/// Errors that can occur while decoding a signature or recovering its signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature blob is not exactly 65 bytes
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// R or S is zero or not below the curve order
    #[error("Signature scalar out of range")]
    InvalidScalar,

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,
}
