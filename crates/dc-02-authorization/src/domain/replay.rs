//! # Replay Guard
//!
//! Single monotonic counter enforcing exactly-once, in-order consumption of
//! authorized operations.

use crate::errors::WalletError;
use serde::{Deserialize, Serialize};

/// Monotonic sequence counter. Starts at 0, so the first valid id is 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayGuard {
    last_consumed: u64,
}

/// Proof that a sequence id was consumed, used to undo the consumption when
/// the operation's effect fails.
#[derive(Debug)]
#[must_use = "a consumed sequence must be kept or rolled back"]
pub struct Consumed {
    previous: u64,
}

impl ReplayGuard {
    /// Create a guard at counter 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last consumed sequence id (the counter).
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.last_consumed
    }

    /// The only sequence id that will be accepted next.
    #[must_use]
    pub fn next_sequence_id(&self) -> u64 {
        self.last_consumed.saturating_add(1)
    }

    /// Check `sequence_id == counter + 1` without mutating.
    pub fn check(&self, sequence_id: u64) -> Result<(), WalletError> {
        let expected = self.next_sequence_id();
        if sequence_id == expected && expected != self.last_consumed {
            Ok(())
        } else {
            Err(WalletError::BadSequence {
                expected,
                got: sequence_id,
            })
        }
    }

    /// Check and consume `sequence_id`.
    pub(crate) fn consume(&mut self, sequence_id: u64) -> Result<Consumed, WalletError> {
        self.check(sequence_id)?;
        let previous = self.last_consumed;
        self.last_consumed = sequence_id;
        Ok(Consumed { previous })
    }

    /// Undo a consumption. Only valid for the most recent `consume`.
    pub(crate) fn rollback(&mut self, consumed: Consumed) {
        debug_assert_eq!(self.last_consumed, consumed.previous + 1);
        self.last_consumed = consumed.previous;
    }
}
