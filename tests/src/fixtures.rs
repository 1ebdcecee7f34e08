//! # Test Fixtures
//!
//! A funded wallet with four fresh secp256k1 signers and signing shortcuts.

use dc_01_signature_recovery::test_helpers::{address_of, generate_keypair, sign_hash_bytes};
use dc_02_authorization::prelude::*;
use k256::ecdsa::SigningKey;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fixed start time for every fixture clock.
pub const NOW: u64 = 1_700_000_000;

/// Expiry one hour after `NOW`.
pub const FUTURE: u64 = NOW + 3_600;

/// The wallet's own identity.
pub const WALLET: Address = Address([0xEE; 20]);

/// Initial wallet balance.
pub const INITIAL_BALANCE: u64 = 1_000_000;

/// Service type used across the suite.
pub type Service = WalletService<Secp256k1Recovery, InMemoryLedger, ManualClock>;

/// Install a test-writer subscriber filtered by `RUST_LOG`. Repeated calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Four signers and a funded wallet.
pub struct Wallet {
    /// Signing keys, index-aligned with `signers`.
    pub keys: Vec<SigningKey>,
    /// Signer addresses A, B, C, D.
    pub signers: Vec<Address>,
    /// The service under test.
    pub service: Arc<Service>,
}

impl Wallet {
    /// Fresh wallet, no signer verified.
    pub fn new() -> Self {
        init_tracing();
        let keys: Vec<SigningKey> = (0..4).map(|_| generate_keypair().0).collect();
        let signers: Vec<Address> = keys.iter().map(address_of).collect();
        let ledger = InMemoryLedger::new();
        ledger.credit(WALLET, U256::from(INITIAL_BALANCE));
        let config = WalletConfig::new(WALLET, signers.clone());
        let service = WalletService::from_config(
            &config,
            Secp256k1Recovery,
            ledger,
            ManualClock::new(NOW),
        )
        .unwrap();
        Self {
            keys,
            signers,
            service: Arc::new(service),
        }
    }

    /// Fresh wallet with the given signers verified.
    pub fn with_verified(indices: &[usize]) -> Self {
        let wallet = Self::new();
        for &i in indices {
            wallet.service.verify_signer(wallet.signers[i]).unwrap();
        }
        wallet
    }

    /// Transfer of `value` to `to` at the current next sequence id.
    pub fn transfer(&self, to: Address, value: u64) -> ValueTransfer {
        ValueTransfer {
            to,
            value: U256::from(value),
            data: vec![],
            expire_time: FUTURE,
            sequence_id: self.service.next_sequence_id(),
        }
    }

    /// Rotation at the current next sequence id.
    pub fn rotation(&self, old_signer: Address, new_signer: Address) -> SignerRotation {
        SignerRotation {
            old_signer,
            new_signer,
            expire_time: FUTURE,
            sequence_id: self.service.next_sequence_id(),
        }
    }

    /// Co-signature by signer `index` over `hash`.
    pub fn sign(&self, index: usize, hash: &Hash) -> Vec<u8> {
        sign_hash_bytes(hash, &self.keys[index])
    }

    /// Wallet-side balance of `address`.
    pub fn balance(&self, address: &Address) -> U256 {
        self.service.delivery().balance(address)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

/// An address that is not a signer.
pub fn outsider(byte: u8) -> Address {
    Address::new([byte; 20])
}
