//! # Authorization Engine
//!
//! Composes the signer registry, replay guard and safe mode into the
//! dual-control validation protocol, and commits the effect of each accepted
//! operation.
//!
//! ## Validation Order
//!
//! Each step is a hard gate; the first failure aborts with no mutation.
//!
//! | Step | Check | Error |
//! |------|-------|-------|
//! | 1 | `expire_time >= now` | `Expired` |
//! | 2 | `sequence_id == counter + 1` | `BadSequence` |
//! | 3 | recover co-signer | `MalformedSignature` |
//! | 4 | co-signer allowed, verified | `SignerNotAllowed`, `SignerNotVerified` |
//! | 5 | safe mode destination (not for the wallet itself) | `DestinationNot*` |
//! | 6 | co-signer != requester | `SelfCosign` |
//!
//! ## Commit Discipline
//!
//! The sequence id is consumed before value leaves the wallet. If delivery
//! fails the consumption is rolled back, so the counter and the effect always
//! move together.

use crate::config::WalletConfig;
use crate::domain::invariants::check_all_invariants;
use crate::domain::{
    ForwarderRegistry, Operation, OperationRequest, ReplayGuard, SafeMode, SignerRegistry,
    SignerRotation, SignerState, ValueTransfer,
};
use crate::errors::WalletError;
use crate::events::{EventLog, WalletEvent};
use crate::ports::outbound::{SignerRecovery, ValueDelivery};
use primitive_types::U256;
use shared_types::{Address, Hash};
use tracing::debug;

/// Inputs to the shared authorization check.
#[derive(Clone, Copy, Debug)]
pub struct AuthorizationCheck<'a> {
    /// Destination subject to safe mode (the wallet itself for rotations).
    pub policy_target: Address,
    /// Digest the co-signer signed.
    pub operation_hash: Hash,
    /// Unix seconds after which the operation is rejected.
    pub expire_time: u64,
    /// Sequence id the operation consumes.
    pub sequence_id: u64,
    /// Raw 65-byte co-signature.
    pub signature: &'a [u8],
    /// The already-gated caller.
    pub requester: Address,
}

/// Outcome of a committed dual-signed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Identity recovered from the co-signature.
    pub co_signer: Address,
    /// Digest that was signed.
    pub operation_hash: Hash,
    /// Sequence id consumed.
    pub sequence_id: u64,
}

/// All mutable wallet state, owned by exactly one writer.
#[derive(Clone, Debug)]
pub struct WalletState {
    wallet_address: Address,
    registry: SignerRegistry,
    replay: ReplayGuard,
    safe_mode: SafeMode,
    forwarders: ForwarderRegistry,
    events: EventLog,
}

impl WalletState {
    /// Create a wallet with exactly four distinct signers, none verified.
    ///
    /// The wallet identity must be non-zero and distinct from every signer,
    /// since transfers to it bypass the safe-mode destination check.
    pub fn new(
        wallet_address: Address,
        signers: &[Address],
        event_log_capacity: usize,
    ) -> Result<Self, WalletError> {
        let registry = SignerRegistry::new(signers)?;
        if wallet_address.is_zero() {
            return Err(WalletError::ZeroWalletAddress);
        }
        if registry.is_allowed(&wallet_address) {
            return Err(WalletError::WalletIsSigner(wallet_address));
        }

        Ok(Self {
            wallet_address,
            registry,
            replay: ReplayGuard::new(),
            safe_mode: SafeMode::default(),
            forwarders: ForwarderRegistry::default(),
            events: EventLog::with_capacity(event_log_capacity),
        })
    }

    /// Create a wallet from configuration.
    pub fn from_config(config: &WalletConfig) -> Result<Self, WalletError> {
        Self::new(
            config.wallet_address,
            &config.signers,
            config.event_log_capacity,
        )
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The wallet's own identity.
    #[must_use]
    pub fn wallet_address(&self) -> Address {
        self.wallet_address
    }

    /// Signer registry (read-only).
    #[must_use]
    pub fn registry(&self) -> &SignerRegistry {
        &self.registry
    }

    /// State of `id`.
    #[must_use]
    pub fn signer_state(&self, id: &Address) -> SignerState {
        self.registry.state(id)
    }

    /// `counter + 1`.
    #[must_use]
    pub fn next_sequence_id(&self) -> u64 {
        self.replay.next_sequence_id()
    }

    /// Last consumed sequence id.
    #[must_use]
    pub fn sequence_counter(&self) -> u64 {
        self.replay.counter()
    }

    /// Whether safe mode is active.
    #[must_use]
    pub fn is_safe_mode(&self) -> bool {
        self.safe_mode.is_active()
    }

    /// Forwarder registry (read-only).
    #[must_use]
    pub fn forwarders(&self) -> &ForwarderRegistry {
        &self.forwarders
    }

    /// Buffered events.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Remove and return buffered events.
    pub fn drain_events(&mut self) -> Vec<WalletEvent> {
        self.events.drain()
    }

    // =========================================================================
    // GATING
    // =========================================================================

    /// Caller must be an allowed and verified signer.
    pub fn require_verified_signer(&self, who: &Address) -> Result<(), WalletError> {
        match self.registry.state(who) {
            SignerState::Disallowed => Err(WalletError::NotAllowed(*who)),
            SignerState::AllowedUnverified => Err(WalletError::NotVerified(*who)),
            SignerState::AllowedVerified => Ok(()),
        }
    }

    /// Run the validation protocol without mutating anything.
    ///
    /// Returns the recovered co-signer on success.
    pub fn authorize<R>(
        &self,
        check: &AuthorizationCheck<'_>,
        now: u64,
        recovery: &R,
    ) -> Result<Address, WalletError>
    where
        R: SignerRecovery + ?Sized,
    {
        // 1. Expiry
        if check.expire_time < now {
            return Err(WalletError::Expired {
                expire_time: check.expire_time,
                now,
            });
        }

        // 2. Sequence
        self.replay.check(check.sequence_id)?;

        // 3. Recover the co-signer
        let other = recovery.recover_signer(&check.operation_hash, check.signature)?;
        debug!(co_signer = %other, "recovered co-signer");

        // 4. Co-signer eligibility
        match self.registry.state(&other) {
            SignerState::Disallowed => return Err(WalletError::SignerNotAllowed(other)),
            SignerState::AllowedUnverified => return Err(WalletError::SignerNotVerified(other)),
            SignerState::AllowedVerified => {}
        }

        // 5. Safe mode destination restriction
        let target = check.policy_target;
        if self.safe_mode.is_active() && target != self.wallet_address {
            match self.registry.state(&target) {
                SignerState::Disallowed => return Err(WalletError::DestinationNotAllowed(target)),
                SignerState::AllowedUnverified => {
                    return Err(WalletError::DestinationNotVerified(target))
                }
                SignerState::AllowedVerified => {}
            }
            if target != check.requester && target != other {
                return Err(WalletError::DestinationNotParticipant(target));
            }
        }

        // 6. Non-collusion
        if other == check.requester {
            return Err(WalletError::SelfCosign(other));
        }

        Ok(other)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Self-verification: an allowed caller proves it controls its key.
    ///
    /// Idempotent. Returns true when this call changed the state.
    pub fn verify_signer(&mut self, caller: Address) -> Result<bool, WalletError> {
        match self.registry.state(&caller) {
            SignerState::Disallowed => Err(WalletError::NotAllowed(caller)),
            SignerState::AllowedVerified => Ok(false),
            SignerState::AllowedUnverified => {
                self.registry.set_verified(caller, true);
                self.events
                    .push(WalletEvent::SignerVerified { signer: caller });
                Ok(true)
            }
        }
    }

    /// Dual-signed value transfer.
    pub fn send_multisig<R, D>(
        &mut self,
        requester: Address,
        op: &ValueTransfer,
        signature: &[u8],
        now: u64,
        recovery: &R,
        delivery: &D,
    ) -> Result<Receipt, WalletError>
    where
        R: SignerRecovery + ?Sized,
        D: ValueDelivery + ?Sized,
    {
        self.require_verified_signer(&requester)?;

        let operation_hash = op.operation_hash();
        let check = AuthorizationCheck {
            policy_target: op.to,
            operation_hash,
            expire_time: op.expire_time,
            sequence_id: op.sequence_id,
            signature,
            requester,
        };
        let co_signer = self.authorize(&check, now, recovery)?;

        let before = self.replay.counter();
        let consumed = self.replay.consume(op.sequence_id)?;

        if let Err(e) = delivery.deliver(self.wallet_address, op.to, op.value, &op.data) {
            self.replay.rollback(consumed);
            debug!(error = %e, sequence_id = op.sequence_id, "delivery failed, sequence rolled back");
            return Err(WalletError::TransferFailed(e.to_string()));
        }

        self.events.push(WalletEvent::Transacted {
            requester,
            co_signer,
            operation_hash,
            to: op.to,
            value: op.value,
            data: op.data.clone(),
            sequence_id: op.sequence_id,
        });
        self.debug_check_invariants(before);

        Ok(Receipt {
            co_signer,
            operation_hash,
            sequence_id: op.sequence_id,
        })
    }

    /// Dual-signed signer rotation.
    pub fn transfer_signership<R>(
        &mut self,
        requester: Address,
        op: &SignerRotation,
        signature: &[u8],
        now: u64,
        recovery: &R,
    ) -> Result<Receipt, WalletError>
    where
        R: SignerRecovery + ?Sized,
    {
        self.require_verified_signer(&requester)?;

        if self.registry.is_allowed(&op.new_signer) {
            return Err(WalletError::NewSignerAlreadyExists(op.new_signer));
        }
        if op.new_signer == self.wallet_address {
            return Err(WalletError::WalletIsSigner(op.new_signer));
        }
        if !self.registry.is_allowed(&op.old_signer) {
            return Err(WalletError::OldSignerNotAllowed(op.old_signer));
        }

        let operation_hash = op.operation_hash();
        let check = AuthorizationCheck {
            policy_target: self.wallet_address,
            operation_hash,
            expire_time: op.expire_time,
            sequence_id: op.sequence_id,
            signature,
            requester,
        };
        let co_signer = self.authorize(&check, now, recovery)?;

        let before = self.replay.counter();
        let _consumed = self.replay.consume(op.sequence_id)?;
        self.registry.set_allowed(op.old_signer, false);
        self.registry.set_allowed(op.new_signer, true);

        self.events.push(WalletEvent::SignershipTransferred {
            requester,
            co_signer,
            old_signer: op.old_signer,
            new_signer: op.new_signer,
            sequence_id: op.sequence_id,
        });
        self.debug_check_invariants(before);

        Ok(Receipt {
            co_signer,
            operation_hash,
            sequence_id: op.sequence_id,
        })
    }

    /// Dispatch a tagged operation request.
    pub fn submit<R, D>(
        &mut self,
        requester: Address,
        request: &OperationRequest,
        now: u64,
        recovery: &R,
        delivery: &D,
    ) -> Result<Receipt, WalletError>
    where
        R: SignerRecovery + ?Sized,
        D: ValueDelivery + ?Sized,
    {
        match &request.operation {
            Operation::ValueTransfer(op) => {
                self.send_multisig(requester, op, &request.signature, now, recovery, delivery)
            }
            Operation::SignerRotation(op) => {
                self.transfer_signership(requester, op, &request.signature, now, recovery)
            }
        }
    }

    /// Single-signature lockdown. Returns true when this call activated it.
    pub fn activate_safe_mode(&mut self, requester: Address) -> Result<bool, WalletError> {
        self.require_verified_signer(&requester)?;
        let flipped = self.safe_mode.activate();
        if flipped {
            self.events
                .push(WalletEvent::SafeModeActivated { by: requester });
        }
        Ok(flipped)
    }

    /// Create and register the next forwarder address.
    pub fn create_forwarder(&mut self, requester: Address) -> Result<Address, WalletError> {
        self.require_verified_signer(&requester)?;
        let (forwarder, forwarder_sequence) = self.forwarders.create(&self.wallet_address);
        self.events.push(WalletEvent::ForwarderCreated {
            forwarder,
            forwarder_sequence,
        });
        Ok(forwarder)
    }

    /// Credit value received without an operation request and record it.
    ///
    /// No authorization applies. Only a backend failure rejects a deposit.
    pub fn deposit<D>(
        &mut self,
        from: Address,
        value: U256,
        data: Vec<u8>,
        delivery: &D,
    ) -> Result<(), WalletError>
    where
        D: ValueDelivery + ?Sized,
    {
        delivery
            .credit_deposit(self.wallet_address, from, value, &data)
            .map_err(|e| WalletError::DepositFailed(e.to_string()))?;
        self.events
            .push(WalletEvent::Deposited { from, value, data });
        Ok(())
    }

    fn debug_check_invariants(&self, counter_before: u64) {
        let violations = check_all_invariants(&self.registry, counter_before, self.replay.counter());
        debug_assert!(violations.is_empty(), "invariant violations: {violations:?}");
    }
}

// =============================================================================
// TESTS
// =============================================================================
