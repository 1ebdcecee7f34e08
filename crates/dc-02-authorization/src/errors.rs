//! # Error Types
//!
//! Every failure is terminal for the current operation and leaves wallet
//! state untouched.

use dc_01_signature_recovery::SignatureError;
use shared_types::Address;
use thiserror::Error;

// =============================================================================
// WALLET ERRORS
// =============================================================================

/// Errors returned by wallet operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    // ----- caller gating -----
    /// The caller is not an allowed signer.
    #[error("caller {0} is not an allowed signer")]
    NotAllowed(Address),

    /// The caller is allowed but has not self-verified.
    #[error("caller {0} has not verified its signing key")]
    NotVerified(Address),

    // ----- signature / request shape -----
    /// The co-signature could not be decoded or recovered.
    #[error("malformed signature: {0}")]
    MalformedSignature(#[source] SignatureError),

    /// The operation's expiry time has passed.
    #[error("operation expired at {expire_time}, now {now}")]
    Expired {
        /// Expiry carried by the operation.
        expire_time: u64,
        /// Clock reading at authorization.
        now: u64,
    },

    /// The sequence id is not exactly the next unconsumed value.
    #[error("bad sequence id: expected {expected}, got {got}")]
    BadSequence {
        /// `counter + 1`.
        expected: u64,
        /// Sequence id carried by the operation.
        got: u64,
    },

    // ----- co-signer gating -----
    /// The recovered co-signer is not an allowed signer.
    #[error("co-signer {0} is not an allowed signer")]
    SignerNotAllowed(Address),

    /// The recovered co-signer has not self-verified.
    #[error("co-signer {0} has not verified its signing key")]
    SignerNotVerified(Address),

    // ----- safe mode -----
    /// Safe mode: destination is not an allowed signer.
    #[error("safe mode: destination {0} is not an allowed signer")]
    DestinationNotAllowed(Address),

    /// Safe mode: destination signer has not self-verified.
    #[error("safe mode: destination {0} has not verified its signing key")]
    DestinationNotVerified(Address),

    /// Safe mode: destination is neither the requester nor the co-signer.
    #[error("safe mode: destination {0} is not a participant in this operation")]
    DestinationNotParticipant(Address),

    // ----- policy -----
    /// The co-signature recovers to the requester itself.
    #[error("co-signature recovers to the requester {0}")]
    SelfCosign(Address),

    /// Rotation target is already an allowed signer.
    #[error("new signer {0} is already an allowed signer")]
    NewSignerAlreadyExists(Address),

    /// Rotation source is not a current signer.
    #[error("old signer {0} is not an allowed signer")]
    OldSignerNotAllowed(Address),

    /// Value delivery reported failure; the operation was rolled back.
    #[error("transfer failed: {0}")]
    TransferFailed(String),

    /// The delivery backend refused to credit an incoming deposit.
    #[error("deposit failed: {0}")]
    DepositFailed(String),

    // ----- construction / configuration -----
    /// Construction requires exactly four signers.
    #[error("expected exactly 4 signers, got {count}")]
    InvalidSignerCount {
        /// Number of signers supplied.
        count: usize,
    },

    /// A signer identity appears more than once at construction.
    #[error("duplicate signer {0}")]
    DuplicateSigner(Address),

    /// The wallet identity is the zero address.
    #[error("wallet address must not be zero")]
    ZeroWalletAddress,

    /// The wallet identity is, or would become, one of its signers.
    #[error("wallet address {0} is also a signer")]
    WalletIsSigner(Address),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<SignatureError> for WalletError {
    fn from(err: SignatureError) -> Self {
        Self::MalformedSignature(err)
    }
}

impl WalletError {
    /// Returns true if resubmitting with a fresh sequence id may succeed.
    #[must_use]
    pub fn is_stale_request(&self) -> bool {
        matches!(self, Self::BadSequence { .. } | Self::Expired { .. })
    }
}
