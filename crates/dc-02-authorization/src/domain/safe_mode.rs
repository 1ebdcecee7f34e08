//! # Safe Mode
//!
//! Irreversible lockdown flag. Once set, value transfers may only reach
//! verified signers taking part in the operation.

use serde::{Deserialize, Serialize};

/// One-way latch: inactive -> active, never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeMode {
    active: bool,
}

impl SafeMode {
    /// Whether lockdown is in force.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate. Returns true only for the call that flipped the flag.
    pub(crate) fn activate(&mut self) -> bool {
        let flipped = !self.active;
        self.active = true;
        flipped
    }
}
