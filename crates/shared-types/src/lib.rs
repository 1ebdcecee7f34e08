//! # Shared Types Crate
//!
//! Value objects used across the dual-control workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identity (`Address`) and digest (`Hash`)
//!   types are defined once here.
//! - **Fixed Width**: every type wraps a fixed-size byte array, so hashing
//!   layouts built from them are unambiguous.

pub mod errors;
pub mod value_objects;

pub use errors::ParseError;
pub use value_objects::{Address, Hash, U256};
