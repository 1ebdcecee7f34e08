//! # Domain Layer (Inner Hexagon)
//!
//! Pure wallet state: signer registry, replay guard, safe mode, operation
//! hashing and the forwarder registry.
//! NO I/O, NO locking, NO clock access.

pub mod forwarder;
pub mod invariants;
pub mod operation;
pub mod replay;
pub mod safe_mode;
pub mod signer;

pub use forwarder::ForwarderRegistry;
pub use invariants::{check_all_invariants, InvariantViolation};
pub use operation::{Operation, OperationRequest, SignerRotation, ValueTransfer};
pub use replay::ReplayGuard;
pub use safe_mode::SafeMode;
pub use signer::{SignerRegistry, SignerState, SIGNER_COUNT};
