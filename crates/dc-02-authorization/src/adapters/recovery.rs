//! # Signer Recovery Adapter
//!
//! Wires the `SignerRecovery` port to the secp256k1 implementation.

use crate::ports::outbound::SignerRecovery;
use dc_01_signature_recovery::{SignatureError, Secp256k1Verifier};
use shared_types::{Address, Hash};

/// secp256k1 signer recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl SignerRecovery for Secp256k1Recovery {
    fn recover_signer(
        &self,
        message_hash: &Hash,
        signature: &[u8],
    ) -> Result<Address, SignatureError> {
        Secp256k1Verifier::new().recover(message_hash, signature)
    }
}
