//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the authorization engine needs from its host:
//! - Signer recovery (the cryptographic primitive)
//! - Value delivery (moving funds out of the wallet)
//! - A clock for expiry checks

use dc_01_signature_recovery::SignatureError;
use primitive_types::U256;
use shared_types::{Address, Hash};
use thiserror::Error;

// =============================================================================
// SIGNER RECOVERY
// =============================================================================

/// Recovers the identity that signed `message_hash`.
///
/// Implementations are stateless and perform no policy checks.
pub trait SignerRecovery: Send + Sync {
    /// Decode `signature` (65 bytes) and recover its signer.
    ///
    /// # Errors
    /// * `SignatureError::InvalidLength` - blob is not 65 bytes
    /// * `SignatureError::InvalidRecoveryId` - `v` outside `{0, 1, 27, 28}`
    /// * `SignatureError::InvalidScalar` / `RecoveryFailed` - no key recoverable
    fn recover_signer(&self, message_hash: &Hash, signature: &[u8])
        -> Result<Address, SignatureError>;
}

// =============================================================================
// VALUE DELIVERY
// =============================================================================

/// Error reported by a value delivery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// Wallet balance does not cover the transfer.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Value the transfer asked for.
        required: U256,
        /// Wallet balance at the time of the transfer.
        available: U256,
    },

    /// Destination refused the value.
    #[error("destination {0} rejected the transfer")]
    Rejected(Address),

    /// Any other delivery failure.
    #[error("delivery error: {0}")]
    Other(String),
}

/// Moves value into and out of the wallet.
///
/// `deliver` is called while the wallet holds its state lock, after the
/// sequence id has been consumed. An `Err` makes the engine roll the
/// sequence back.
pub trait ValueDelivery: Send + Sync {
    /// Deliver `value` with `data` from `wallet` to `to`.
    fn deliver(
        &self,
        wallet: Address,
        to: Address,
        value: U256,
        data: &[u8],
    ) -> Result<(), DeliveryError>;

    /// Credit `value` sent by `from` to `wallet`.
    ///
    /// An `Err` rejects the deposit and no event is recorded.
    fn credit_deposit(
        &self,
        wallet: Address,
        from: Address,
        value: U256,
        data: &[u8],
    ) -> Result<(), DeliveryError>;
}

// =============================================================================
// CLOCK
// =============================================================================

/// Source of the current Unix time in seconds.
pub trait Clock: Send + Sync {
    /// Current time; compared against `expire_time`.
    fn now(&self) -> u64;
}
