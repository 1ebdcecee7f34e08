//! # Wallet Configuration
//!
//! Construction parameters for a wallet service. The wallet identity and
//! the signer set must be supplied; the event log capacity has a default.

use crate::errors::WalletError;
use serde::Deserialize;
use shared_types::Address;

/// Default number of buffered events.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1024;

fn default_event_log_capacity() -> usize {
    DEFAULT_EVENT_LOG_CAPACITY
}

/// Complete wallet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletConfig {
    /// The wallet's own identity. Transfers to it bypass the safe-mode
    /// participant check, so it must be non-zero and not a signer.
    pub wallet_address: Address,
    /// Exactly four distinct signer identities.
    pub signers: Vec<Address>,
    /// Maximum buffered events before the oldest are dropped.
    #[serde(default = "default_event_log_capacity")]
    pub event_log_capacity: usize,
}

impl WalletConfig {
    /// Config for `wallet_address` with the given signers and the default
    /// event log capacity.
    #[must_use]
    pub fn new(wallet_address: Address, signers: Vec<Address>) -> Self {
        Self {
            wallet_address,
            signers,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }

    /// Parse from JSON. Addresses are `0x`-prefixed hex strings.
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::Config(e.to_string()))
    }
}
