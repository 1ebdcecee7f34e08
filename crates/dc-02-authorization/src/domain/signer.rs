//! # Signer Registry
//!
//! Tracks which identities may co-authorize and which have proven live
//! control of their key.
//!
//! A signer's two flags are folded into one [`SignerState`] so that the
//! "verified but not allowed" combination cannot be represented.

use crate::errors::WalletError;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::{BTreeMap, HashSet};

/// Number of signers a wallet holds at all times.
pub const SIGNER_COUNT: usize = 4;

/// Reachable states of a signer identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignerState {
    /// Not a signer (never was, or rotated out).
    Disallowed,
    /// Signer that has not yet proven key possession.
    AllowedUnverified,
    /// Signer that has self-verified.
    AllowedVerified,
}

impl SignerState {
    /// `allowed` flag.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        !matches!(self, Self::Disallowed)
    }

    /// `verified` flag. Implies `is_allowed`.
    #[must_use]
    pub fn is_verified(self) -> bool {
        matches!(self, Self::AllowedVerified)
    }
}

/// Mapping from identity to signer state.
///
/// Identities absent from the map are `Disallowed`. Rotated-out signers are
/// removed rather than kept as tombstones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerRegistry {
    signers: BTreeMap<Address, SignerState>,
}

impl SignerRegistry {
    /// Build a registry of exactly four distinct, allowed, unverified signers.
    pub fn new(signers: &[Address]) -> Result<Self, WalletError> {
        if signers.len() != SIGNER_COUNT {
            return Err(WalletError::InvalidSignerCount {
                count: signers.len(),
            });
        }

        let mut seen = HashSet::with_capacity(SIGNER_COUNT);
        for signer in signers {
            if !seen.insert(*signer) {
                return Err(WalletError::DuplicateSigner(*signer));
            }
        }

        let signers = signers
            .iter()
            .map(|s| (*s, SignerState::AllowedUnverified))
            .collect();
        Ok(Self { signers })
    }

    /// Current state of an identity.
    #[must_use]
    pub fn state(&self, id: &Address) -> SignerState {
        self.signers
            .get(id)
            .copied()
            .unwrap_or(SignerState::Disallowed)
    }

    /// Whether `id` may participate.
    #[must_use]
    pub fn is_allowed(&self, id: &Address) -> bool {
        self.state(id).is_allowed()
    }

    /// Whether `id` has proven possession of its key.
    #[must_use]
    pub fn is_verified(&self, id: &Address) -> bool {
        self.state(id).is_verified()
    }

    /// Set or clear the `allowed` flag.
    ///
    /// Clearing `allowed` also clears `verified`. Setting `allowed` on an
    /// already-allowed identity keeps its verification.
    pub(crate) fn set_allowed(&mut self, id: Address, allowed: bool) {
        if allowed {
            self.signers
                .entry(id)
                .or_insert(SignerState::AllowedUnverified);
        } else {
            self.signers.remove(&id);
        }
    }

    /// Set or clear the `verified` flag.
    ///
    /// Returns false (and changes nothing) when `id` is not allowed.
    pub(crate) fn set_verified(&mut self, id: Address, verified: bool) -> bool {
        match self.signers.get_mut(&id) {
            Some(state) => {
                *state = if verified {
                    SignerState::AllowedVerified
                } else {
                    SignerState::AllowedUnverified
                };
                true
            }
            None => false,
        }
    }

    /// All currently allowed signers with their state, ordered by address.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &SignerState)> {
        self.signers.iter()
    }

    /// Number of allowed signers.
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.signers.len()
    }

    /// Number of verified signers.
    #[must_use]
    pub fn verified_count(&self) -> usize {
        self.signers.values().filter(|s| s.is_verified()).count()
    }
}
