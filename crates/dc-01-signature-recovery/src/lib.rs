//! # Signature Recovery (DC-01)
//!
//! Recovers the authorizing identity from a message hash and a detached
//! 65-byte secp256k1 signature.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O, no state
//!
//! ## Wire Format
//!
//! `r (32 bytes) || s (32 bytes) || v (1 byte)`, with `v` accepted in either
//! `{0, 1}` or `{27, 28}` and normalized to `{27, 28}` on parse.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **High-S Tolerance**: high S values are folded to the low half before
//!   recovery, which yields the same public key
//! - **No Policy**: replay and signer eligibility are enforced by callers

pub mod domain;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_signer, Secp256k1Verifier};
pub use domain::entities::{Signature, SIGNATURE_LEN};
pub use domain::errors::SignatureError;
