//! # Forwarder Registry
//!
//! Counter-backed factory for auxiliary deposit addresses. A forwarder only
//! needs a unique identity and membership in the known set.

use dc_01_signature_recovery::keccak256;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeSet;

/// Domain tag mixed into forwarder address derivation.
const FORWARDER_TAG: &[u8; 9] = b"FORWARDER";

/// Known forwarders and the next derivation sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwarderRegistry {
    next_sequence: u64,
    known: BTreeSet<Address>,
}

impl ForwarderRegistry {
    /// Derive the address the forwarder with `sequence` would receive.
    #[must_use]
    pub fn derive_address(wallet: &Address, sequence: u64) -> Address {
        let mut seq = [0u8; 32];
        U256::from(sequence).to_big_endian(&mut seq);

        let mut preimage = Vec::with_capacity(FORWARDER_TAG.len() + Address::LEN + 32);
        preimage.extend_from_slice(FORWARDER_TAG);
        preimage.extend_from_slice(wallet.as_bytes());
        preimage.extend_from_slice(&seq);

        let hash = keccak256(&preimage);
        let mut out = [0u8; 20];
        out.copy_from_slice(&hash.as_bytes()[12..]);
        Address::new(out)
    }

    /// Register the next forwarder and bump the sequence.
    pub(crate) fn create(&mut self, wallet: &Address) -> (Address, u64) {
        let sequence = self.next_sequence;
        let address = Self::derive_address(wallet, sequence);
        self.known.insert(address);
        self.next_sequence += 1;
        (address, sequence)
    }

    /// Whether `address` was created by this registry.
    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.known.contains(address)
    }

    /// Number of forwarders created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// True if no forwarder has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Sequence the next forwarder will use.
    #[must_use]
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }
}
