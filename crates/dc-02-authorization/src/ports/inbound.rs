//! # Driving Ports (API - Inbound)
//!
//! The public API of the wallet. Every mutating call names the caller
//! explicitly; the host is responsible for authenticating it.

use crate::domain::{OperationRequest, SignerRotation, SignerState, ValueTransfer};
use crate::engine::Receipt;
use crate::errors::WalletError;
use primitive_types::U256;
use shared_types::Address;

/// Dual-control wallet API.
///
/// Implementations serialize all mutations. Queries observe either the full
/// effect of an operation or none of it.
///
/// ## Usage
///
/// ```ignore
/// api.verify_signer(alice)?;
/// api.verify_signer(bob)?;
/// let receipt = api.send_multisig(alice, &transfer, &bob_signature)?;
/// ```
pub trait WalletApi: Send + Sync {
    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Mark `caller` verified. Idempotent.
    ///
    /// # Errors
    /// * `NotAllowed` - caller is not a signer
    fn verify_signer(&self, caller: Address) -> Result<(), WalletError>;

    /// Dual-signed value transfer.
    ///
    /// `signature` is the co-signer's 65-byte signature over the TRANSACT hash.
    fn send_multisig(
        &self,
        requester: Address,
        op: &ValueTransfer,
        signature: &[u8],
    ) -> Result<Receipt, WalletError>;

    /// Dual-signed signer rotation.
    ///
    /// `signature` is the co-signer's 65-byte signature over the XFERSIGN hash.
    fn transfer_signership(
        &self,
        requester: Address,
        op: &SignerRotation,
        signature: &[u8],
    ) -> Result<Receipt, WalletError>;

    /// Dispatch a tagged request to the matching operation.
    fn submit(&self, requester: Address, request: &OperationRequest)
        -> Result<Receipt, WalletError>;

    /// Irreversibly restrict transfer destinations. Idempotent.
    fn activate_safe_mode(&self, requester: Address) -> Result<(), WalletError>;

    /// Create a new forwarder deposit address.
    fn create_forwarder(&self, requester: Address) -> Result<Address, WalletError>;

    /// Credit value received by the wallet and record it.
    ///
    /// Needs no authorization and works in safe mode.
    ///
    /// # Errors
    ///
    /// * `WalletError::DepositFailed` - the ledger refused the credit
    fn deposit(&self, from: Address, value: U256, data: Vec<u8>) -> Result<(), WalletError>;

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The wallet's own identity.
    fn wallet_address(&self) -> Address;

    /// `counter + 1`: the only sequence id the next operation may carry.
    fn next_sequence_id(&self) -> u64;

    /// State of `id` in the signer registry.
    fn signer_state(&self, id: &Address) -> SignerState;

    /// Whether `id` is an allowed signer.
    fn is_allowed(&self, id: &Address) -> bool {
        self.signer_state(id).is_allowed()
    }

    /// Whether `id` is a verified signer.
    fn is_verified(&self, id: &Address) -> bool {
        self.signer_state(id).is_verified()
    }

    /// Whether safe mode is active.
    fn is_safe_mode(&self) -> bool;

    /// The current allowed signers, in address order.
    fn signers(&self) -> Vec<Address>;

    /// Whether `address` was created by `create_forwarder`.
    fn is_forwarder(&self, address: &Address) -> bool;

    /// Number of forwarders created so far.
    fn forwarder_count(&self) -> usize;
}
