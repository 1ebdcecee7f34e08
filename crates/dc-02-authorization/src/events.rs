//! # Wallet Events
//!
//! Record of committed effects for external observers. Events are appended
//! only after an operation commits; rejected or rolled-back operations leave
//! no trace here.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};
use std::collections::VecDeque;

/// A committed wallet effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WalletEvent {
    /// Value received without an operation request.
    Deposited {
        /// Sender of the value.
        from: Address,
        /// Amount credited to the wallet.
        value: U256,
        /// Opaque payload sent with the value.
        data: Vec<u8>,
    },
    /// Dual-signed value transfer delivered.
    Transacted {
        /// Signer that submitted the operation.
        requester: Address,
        /// Signer recovered from the co-signature.
        co_signer: Address,
        /// Digest the co-signer signed.
        operation_hash: Hash,
        /// Destination of the value.
        to: Address,
        /// Amount delivered.
        value: U256,
        /// Payload delivered with the value.
        data: Vec<u8>,
        /// Sequence id the transfer consumed.
        sequence_id: u64,
    },
    /// A signer proved possession of its key.
    SignerVerified {
        /// The newly verified signer.
        signer: Address,
    },
    /// Dual-signed signer rotation applied.
    SignershipTransferred {
        /// Signer that submitted the rotation.
        requester: Address,
        /// Signer recovered from the co-signature.
        co_signer: Address,
        /// Signer removed from the set.
        old_signer: Address,
        /// Signer added to the set, unverified.
        new_signer: Address,
        /// Sequence id the rotation consumed.
        sequence_id: u64,
    },
    /// Safe mode switched on.
    SafeModeActivated {
        /// Verified signer that triggered the lockdown.
        by: Address,
    },
    /// Auxiliary deposit address created.
    ForwarderCreated {
        /// Derived forwarder address.
        forwarder: Address,
        /// Forwarder counter value used for the derivation.
        forwarder_sequence: u64,
    },
}

/// Bounded, oldest-first event buffer.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: VecDeque<WalletEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventLog {
    /// Create a log holding at most `capacity` events (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            dropped: 0,
        }
    }

    /// Append, evicting the oldest event when full.
    pub fn push(&mut self, event: WalletEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Snapshot of buffered events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WalletEvent> {
        self.events.iter().cloned().collect()
    }

    /// Remove and return all buffered events.
    pub fn drain(&mut self) -> Vec<WalletEvent> {
        self.events.drain(..).collect()
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events evicted because the buffer was full.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_EVENT_LOG_CAPACITY)
    }
}
