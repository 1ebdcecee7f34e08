//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.
//! - `Secp256k1Recovery`: signer recovery backed by `dc-01`
//! - `InMemoryLedger`: balance-tracking value delivery
//! - `SystemClock` / `ManualClock`: time sources

pub mod clock;
pub mod ledger;
pub mod recovery;

pub use clock::{ManualClock, SystemClock};
pub use ledger::InMemoryLedger;
pub use recovery::Secp256k1Recovery;
