//! # Ledger Adapter
//!
//! In-memory balances implementing `ValueDelivery`, both directions.
//! A production host would route deliveries to its settlement layer.

use crate::ports::outbound::{DeliveryError, ValueDelivery};
use parking_lot::RwLock;
use primitive_types::U256;
use shared_types::Address;
use std::collections::{HashMap, HashSet};

/// In-memory balance ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, U256>>,
    rejecting: RwLock<HashSet<Address>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `address`.
    pub fn credit(&self, address: Address, value: U256) {
        let mut balances = self.balances.write();
        let entry = balances.entry(address).or_insert_with(U256::zero);
        *entry = entry.saturating_add(value);
    }

    /// Current balance of `address`.
    #[must_use]
    pub fn balance(&self, address: &Address) -> U256 {
        self.balances
            .read()
            .get(address)
            .copied()
            .unwrap_or_default()
    }

    /// Make every later delivery to `address` fail.
    pub fn reject_deliveries_to(&self, address: Address) {
        self.rejecting.write().insert(address);
    }

    /// Undo `reject_deliveries_to`.
    pub fn accept_deliveries_to(&self, address: &Address) {
        self.rejecting.write().remove(address);
    }
}

impl ValueDelivery for InMemoryLedger {
    fn deliver(
        &self,
        wallet: Address,
        to: Address,
        value: U256,
        _data: &[u8],
    ) -> Result<(), DeliveryError> {
        if self.rejecting.read().contains(&to) {
            return Err(DeliveryError::Rejected(to));
        }

        let mut balances = self.balances.write();
        let available = balances.get(&wallet).copied().unwrap_or_default();
        let remaining = available
            .checked_sub(value)
            .ok_or(DeliveryError::InsufficientBalance {
                required: value,
                available,
            })?;
        balances.insert(wallet, remaining);

        let dest = balances.entry(to).or_insert_with(U256::zero);
        *dest = dest.saturating_add(value);
        Ok(())
    }

    fn credit_deposit(
        &self,
        wallet: Address,
        _from: Address,
        value: U256,
        _data: &[u8],
    ) -> Result<(), DeliveryError> {
        let mut balances = self.balances.write();
        let entry = balances.entry(wallet).or_insert_with(U256::zero);
        *entry = entry
            .checked_add(value)
            .ok_or_else(|| DeliveryError::Other("wallet balance overflow".into()))?;
        Ok(())
    }
}
