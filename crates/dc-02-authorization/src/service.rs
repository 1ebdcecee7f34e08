//! # Wallet Service
//!
//! Thread-safe front end over `WalletState`. Each call takes the state lock
//! for its whole duration, so operations are linearizable and a delivery
//! runs while no other operation can observe the consumed sequence id.
//!
//! ## Logging
//!
//! - `info!` for committed effects
//! - `warn!` for rejected requests and failed deliveries
//! - `debug!` for idempotent no-ops

use crate::config::WalletConfig;
use crate::domain::{OperationRequest, SignerRotation, SignerState, ValueTransfer};
use crate::engine::{Receipt, WalletState};
use crate::errors::WalletError;
use crate::events::WalletEvent;
use crate::ports::inbound::WalletApi;
use crate::ports::outbound::{Clock, SignerRecovery, ValueDelivery};
use parking_lot::{Mutex, RwLock};
use primitive_types::U256;
use shared_types::Address;
use tracing::{debug, info, instrument, warn};

/// Counters for the wallet service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Operations that committed (including verification and safe mode).
    pub operations_accepted: u64,
    /// Operations rejected before any mutation.
    pub operations_rejected: u64,
    /// Authorized transfers whose delivery failed and was rolled back.
    pub transfers_failed: u64,
    /// Deposits recorded.
    pub deposits_received: u64,
}

/// The dual-control wallet service.
pub struct WalletService<R, D, C>
where
    R: SignerRecovery,
    D: ValueDelivery,
    C: Clock,
{
    state: Mutex<WalletState>,
    recovery: R,
    delivery: D,
    clock: C,
    stats: RwLock<ServiceStats>,
}

impl<R, D, C> WalletService<R, D, C>
where
    R: SignerRecovery,
    D: ValueDelivery,
    C: Clock,
{
    /// Create a service around an existing wallet state.
    pub fn new(state: WalletState, recovery: R, delivery: D, clock: C) -> Self {
        info!(
            wallet = %state.wallet_address(),
            signers = state.registry().allowed_count(),
            "wallet service created"
        );
        Self {
            state: Mutex::new(state),
            recovery,
            delivery,
            clock,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Create a service from configuration.
    ///
    /// # Errors
    /// * `InvalidSignerCount` / `DuplicateSigner` - bad signer set
    pub fn from_config(
        config: &WalletConfig,
        recovery: R,
        delivery: D,
        clock: C,
    ) -> Result<Self, WalletError> {
        let state = WalletState::from_config(config)?;
        Ok(Self::new(state, recovery, delivery, clock))
    }

    /// Current service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// Snapshot of buffered events, oldest first.
    pub fn events(&self) -> Vec<WalletEvent> {
        self.state.lock().events().snapshot()
    }

    /// Remove and return buffered events.
    pub fn drain_events(&self) -> Vec<WalletEvent> {
        self.state.lock().drain_events()
    }

    /// Clone of the full wallet state.
    pub fn snapshot(&self) -> WalletState {
        self.state.lock().clone()
    }

    /// The delivery adapter.
    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// The clock adapter.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn record<T>(&self, result: &Result<T, WalletError>) {
        let mut stats = self.stats.write();
        match result {
            Ok(_) => stats.operations_accepted += 1,
            Err(WalletError::TransferFailed(_)) => stats.transfers_failed += 1,
            Err(_) => stats.operations_rejected += 1,
        }
    }
}

impl<R, D, C> WalletApi for WalletService<R, D, C>
where
    R: SignerRecovery,
    D: ValueDelivery,
    C: Clock,
{
    #[instrument(skip_all, fields(caller = %caller))]
    fn verify_signer(&self, caller: Address) -> Result<(), WalletError> {
        let result = self.state.lock().verify_signer(caller);
        self.record(&result);
        match &result {
            Ok(true) => info!("signer verified"),
            Ok(false) => debug!("signer already verified"),
            Err(e) => warn!(error = %e, "verification rejected"),
        }
        result.map(|_| ())
    }

    #[instrument(skip_all, fields(requester = %requester, sequence_id = op.sequence_id))]
    fn send_multisig(
        &self,
        requester: Address,
        op: &ValueTransfer,
        signature: &[u8],
    ) -> Result<Receipt, WalletError> {
        let now = self.clock.now();
        let result = self.state.lock().send_multisig(
            requester,
            op,
            signature,
            now,
            &self.recovery,
            &self.delivery,
        );
        self.record(&result);
        match &result {
            Ok(receipt) => info!(
                co_signer = %receipt.co_signer,
                to = %op.to,
                value = %op.value,
                "transfer committed"
            ),
            Err(e) => warn!(error = %e, to = %op.to, "transfer rejected"),
        }
        result
    }

    #[instrument(skip_all, fields(requester = %requester, sequence_id = op.sequence_id))]
    fn transfer_signership(
        &self,
        requester: Address,
        op: &SignerRotation,
        signature: &[u8],
    ) -> Result<Receipt, WalletError> {
        let now = self.clock.now();
        let result =
            self.state
                .lock()
                .transfer_signership(requester, op, signature, now, &self.recovery);
        self.record(&result);
        match &result {
            Ok(receipt) => info!(
                co_signer = %receipt.co_signer,
                old_signer = %op.old_signer,
                new_signer = %op.new_signer,
                "signer rotation committed"
            ),
            Err(e) => warn!(error = %e, "signer rotation rejected"),
        }
        result
    }

    #[instrument(
        skip_all,
        fields(requester = %requester, sequence_id = request.operation.sequence_id())
    )]
    fn submit(
        &self,
        requester: Address,
        request: &OperationRequest,
    ) -> Result<Receipt, WalletError> {
        let now = self.clock.now();
        let result = self.state.lock().submit(
            requester,
            request,
            now,
            &self.recovery,
            &self.delivery,
        );
        self.record(&result);
        match &result {
            Ok(receipt) => info!(
                co_signer = %receipt.co_signer,
                operation_hash = %receipt.operation_hash,
                "operation committed"
            ),
            Err(e) => warn!(error = %e, "operation rejected"),
        }
        result
    }

    #[instrument(skip_all, fields(requester = %requester))]
    fn activate_safe_mode(&self, requester: Address) -> Result<(), WalletError> {
        let result = self.state.lock().activate_safe_mode(requester);
        self.record(&result);
        match &result {
            Ok(true) => info!("safe mode activated"),
            Ok(false) => debug!("safe mode already active"),
            Err(e) => warn!(error = %e, "safe mode activation rejected"),
        }
        result.map(|_| ())
    }

    #[instrument(skip_all, fields(requester = %requester))]
    fn create_forwarder(&self, requester: Address) -> Result<Address, WalletError> {
        let result = self.state.lock().create_forwarder(requester);
        self.record(&result);
        match &result {
            Ok(forwarder) => info!(forwarder = %forwarder, "forwarder created"),
            Err(e) => warn!(error = %e, "forwarder creation rejected"),
        }
        result
    }

    #[instrument(skip_all, fields(from = %from, value = %value))]
    fn deposit(&self, from: Address, value: U256, data: Vec<u8>) -> Result<(), WalletError> {
        let result = self
            .state
            .lock()
            .deposit(from, value, data, &self.delivery);
        match &result {
            Ok(()) => {
                self.stats.write().deposits_received += 1;
                debug!("deposit credited");
            }
            Err(e) => warn!(error = %e, "deposit rejected"),
        }
        result
    }

    fn wallet_address(&self) -> Address {
        self.state.lock().wallet_address()
    }

    fn next_sequence_id(&self) -> u64 {
        self.state.lock().next_sequence_id()
    }

    fn signer_state(&self, id: &Address) -> SignerState {
        self.state.lock().signer_state(id)
    }

    fn is_safe_mode(&self) -> bool {
        self.state.lock().is_safe_mode()
    }

    fn signers(&self) -> Vec<Address> {
        self.state
            .lock()
            .registry()
            .iter()
            .map(|(address, _)| *address)
            .collect()
    }

    fn is_forwarder(&self, address: &Address) -> bool {
        self.state.lock().forwarders().contains(address)
    }

    fn forwarder_count(&self) -> usize {
        self.state.lock().forwarders().len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
