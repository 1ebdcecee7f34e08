//! # DC-02 Authorization - Dual-Control Wallet Engine
//!
//! A wallet controlled by four signer identities where every value-moving
//! or signer-rotating operation needs two distinct signers: the requester,
//! who calls the API, and a co-signer, whose detached signature over the
//! operation hash is presented in the request.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Exactly four allowed signers | `domain/signer.rs` - `SignerRegistry::new()`, rotation swaps one for one |
//! | Verified implies allowed | `domain/signer.rs` - `SignerState` has no verified-but-disallowed case |
//! | Sequence ids consumed exactly once, in order | `domain/replay.rs` - `ReplayGuard::consume()` |
//! | Safe mode never deactivates | `domain/safe_mode.rs` - no deactivation path |
//! | Counter moves with the effect | `engine.rs` - rollback on delivery failure |
//! | Wallet is neither zero nor a signer | `engine.rs` - `WalletState::new()`, rotation guard |
//!
//! ## Validation Order
//!
//! Expiry, sequence, co-signer recovery, co-signer eligibility, safe mode
//! destination, non-collusion. See `engine.rs`.
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose | Default Adapter |
//! |------|---------|-----------------|
//! | `SignerRecovery` | Recover the co-signer | `Secp256k1Recovery` (dc-01) |
//! | `ValueDelivery` | Move value out, credit deposits in | `InMemoryLedger` |
//! | `Clock` | Unix seconds for expiry | `SystemClock` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use dc_02_authorization::prelude::*;
//!
//! let config = WalletConfig::new(wallet, signers);
//! let service = WalletService::from_config(&config, Secp256k1Recovery, ledger, SystemClock)?;
//!
//! service.verify_signer(alice)?;
//! service.verify_signer(bob)?;
//! let receipt = service.send_multisig(alice, &transfer, &bob_signature)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::{
        check_all_invariants, ForwarderRegistry, InvariantViolation, Operation,
        OperationRequest, ReplayGuard, SafeMode, SignerRegistry, SignerRotation, SignerState,
        ValueTransfer, SIGNER_COUNT,
    };

    // Value objects
    pub use shared_types::{Address, Hash, U256};

    // Engine
    pub use crate::engine::{AuthorizationCheck, Receipt, WalletState};

    // Ports
    pub use crate::ports::inbound::WalletApi;
    pub use crate::ports::outbound::{Clock, DeliveryError, SignerRecovery, ValueDelivery};

    // Adapters
    pub use crate::adapters::{InMemoryLedger, ManualClock, Secp256k1Recovery, SystemClock};

    // Config, events, errors
    pub use crate::config::WalletConfig;
    pub use crate::errors::WalletError;
    pub use crate::events::{EventLog, WalletEvent};

    // Service
    pub use crate::service::{ServiceStats, WalletService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
