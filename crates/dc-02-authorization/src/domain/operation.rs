//! # Operations and Their Signing Hashes
//!
//! The two signable operation kinds and the deterministic digest a co-signer
//! signs for each.
//!
//! ## Byte Layout
//!
//! Packed concatenation hashed with Keccak-256. Integers are 32-byte
//! big-endian words, addresses are 20 raw bytes.
//!
//! | Kind | Layout |
//! |------|--------|
//! | TRANSACT | `"TRANSACT"` ‖ to ‖ value ‖ data ‖ expire_time ‖ sequence_id |
//! | XFERSIGN | `"XFERSIGN"` ‖ old ‖ new ‖ expire_time ‖ sequence_id |
//!
//! Everything after `data` is fixed width, so the variable-length field never
//! makes the encoding ambiguous.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};

/// Domain tag for value transfers.
pub const TRANSACT_TAG: &[u8; 8] = b"TRANSACT";

/// Domain tag for signer rotations.
pub const XFERSIGN_TAG: &[u8; 8] = b"XFERSIGN";

/// Move `value` with `data` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueTransfer {
    /// Destination.
    pub to: Address,
    /// Amount to deliver.
    pub value: U256,
    /// Opaque payload delivered with the value.
    pub data: Vec<u8>,
    /// Unix timestamp (seconds) after which the operation is rejected.
    pub expire_time: u64,
    /// Must equal the wallet's next sequence id.
    pub sequence_id: u64,
}

impl ValueTransfer {
    /// The TRANSACT digest the co-signer signs.
    #[must_use]
    pub fn operation_hash(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(TRANSACT_TAG);
        hasher.update(self.to.as_bytes());
        hasher.update(u256_word(self.value));
        hasher.update(&self.data);
        hasher.update(u64_word(self.expire_time));
        hasher.update(u64_word(self.sequence_id));
        Hash::new(hasher.finalize().into())
    }
}

/// Replace `old_signer` with `new_signer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerRotation {
    /// Signer being removed.
    pub old_signer: Address,
    /// Signer being added (starts unverified).
    pub new_signer: Address,
    /// Unix timestamp (seconds) after which the operation is rejected.
    pub expire_time: u64,
    /// Must equal the wallet's next sequence id.
    pub sequence_id: u64,
}

impl SignerRotation {
    /// The XFERSIGN digest the co-signer signs.
    #[must_use]
    pub fn operation_hash(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(XFERSIGN_TAG);
        hasher.update(self.old_signer.as_bytes());
        hasher.update(self.new_signer.as_bytes());
        hasher.update(u64_word(self.expire_time));
        hasher.update(u64_word(self.sequence_id));
        Hash::new(hasher.finalize().into())
    }
}

/// Tagged union of signable operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// TRANSACT
    ValueTransfer(ValueTransfer),
    /// XFERSIGN
    SignerRotation(SignerRotation),
}

impl Operation {
    /// Digest signed by the co-signer.
    #[must_use]
    pub fn operation_hash(&self) -> Hash {
        match self {
            Self::ValueTransfer(op) => op.operation_hash(),
            Self::SignerRotation(op) => op.operation_hash(),
        }
    }

    /// Expiry timestamp.
    #[must_use]
    pub fn expire_time(&self) -> u64 {
        match self {
            Self::ValueTransfer(op) => op.expire_time,
            Self::SignerRotation(op) => op.expire_time,
        }
    }

    /// Sequence id this operation consumes.
    #[must_use]
    pub fn sequence_id(&self) -> u64 {
        match self {
            Self::ValueTransfer(op) => op.sequence_id,
            Self::SignerRotation(op) => op.sequence_id,
        }
    }

    /// Destination checked by safe mode. Rotations target the wallet itself.
    #[must_use]
    pub fn policy_target(&self, wallet: Address) -> Address {
        match self {
            Self::ValueTransfer(op) => op.to,
            Self::SignerRotation(_) => wallet,
        }
    }
}

/// An operation plus the detached co-signature over its hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    /// The operation.
    pub operation: Operation,
    /// Raw signature blob, decoded during authorization.
    pub signature: Vec<u8>,
}

fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
