//! # Domain Invariants
//!
//! Invariants that MUST hold after every committed operation.
//!
//! - Signer count: exactly four allowed signers, always
//! - Verified implies allowed: structural, `SignerState` cannot express the
//!   disallowed-verified combination
//! - Sequence: a commit advances the counter by exactly 0 or 1

use super::signer::{SignerRegistry, SIGNER_COUNT};

/// Exactly four signers are allowed.
#[must_use]
pub fn check_signer_count_invariant(registry: &SignerRegistry) -> bool {
    registry.allowed_count() == SIGNER_COUNT
}

/// Every verified signer is allowed.
#[must_use]
pub fn check_verified_implies_allowed(registry: &SignerRegistry) -> bool {
    registry
        .iter()
        .all(|(_, state)| !state.is_verified() || state.is_allowed())
}

/// The counter moved forward by 0 or 1, never backward.
#[must_use]
pub fn check_sequence_invariant(before: u64, after: u64) -> bool {
    after == before || after == before + 1
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Allowed signer count drifted from four.
    SignerCount {
        /// Number of allowed signers observed.
        allowed: usize,
    },
    /// A verified signer is not allowed.
    VerifiedNotAllowed,
    /// Counter moved by something other than 0 or 1.
    Sequence {
        /// Counter before the transition.
        before: u64,
        /// Counter after the transition.
        after: u64,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignerCount { allowed } => {
                write!(f, "signer count is {allowed}, expected {SIGNER_COUNT}")
            }
            Self::VerifiedNotAllowed => write!(f, "verified signer is not allowed"),
            Self::Sequence { before, after } => {
                write!(f, "sequence moved from {before} to {after}")
            }
        }
    }
}

/// Check all invariants for a transition.
#[must_use]
pub fn check_all_invariants(
    registry: &SignerRegistry,
    counter_before: u64,
    counter_after: u64,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !check_signer_count_invariant(registry) {
        violations.push(InvariantViolation::SignerCount {
            allowed: registry.allowed_count(),
        });
    }

    if !check_verified_implies_allowed(registry) {
        violations.push(InvariantViolation::VerifiedNotAllowed);
    }

    if !check_sequence_invariant(counter_before, counter_after) {
        violations.push(InvariantViolation::Sequence {
            before: counter_before,
            after: counter_after,
        });
    }

    violations
}
