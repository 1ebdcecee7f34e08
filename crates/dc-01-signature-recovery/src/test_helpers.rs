//! # Test Helpers
//!
//! Keypair generation and prehash signing for tests in this and dependent
//! crates. Enabled by the `test-helpers` feature.

#![allow(clippy::missing_panics_doc)]

use crate::domain::ecdsa::{address_from_pubkey, invert_s};
use crate::domain::entities::Signature;
use k256::ecdsa::{SigningKey, VerifyingKey};
use shared_types::{Address, Hash};

/// Generate a new secp256k1 keypair.
pub fn generate_keypair() -> (SigningKey, VerifyingKey) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let verifying_key = *signing_key.verifying_key();
    (signing_key, verifying_key)
}

/// Address controlled by a signing key.
pub fn address_of(key: &SigningKey) -> Address {
    address_from_pubkey(key.verifying_key())
}

/// Sign a message hash, returning a low-S signature with `v` in `{27, 28}`.
pub fn sign_hash(message_hash: &Hash, private_key: &SigningKey) -> Signature {
    let (sig, recid) = private_key
        .sign_prehash_recoverable(message_hash.as_bytes())
        .expect("signing failed");

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    // k256 already emits low S, fold anyway if it ever does not
    let s_normalized = invert_if_high(&s);
    let flipped = s_normalized != s;
    let parity = recid.to_byte() & 1;
    let v = 27 + if flipped { parity ^ 1 } else { parity };

    Signature {
        r,
        s: s_normalized,
        v,
    }
}

/// Sign a message hash and return the 65-byte wire encoding.
pub fn sign_hash_bytes(message_hash: &Hash, private_key: &SigningKey) -> Vec<u8> {
    sign_hash(message_hash, private_key).to_bytes().to_vec()
}

fn invert_if_high(s: &[u8; 32]) -> [u8; 32] {
    let inverted = invert_s(s);
    // The lower of s and n - s is the low-S form
    if inverted < *s {
        inverted
    } else {
        *s
    }
}

/// The high-S twin of `signature`: `s' = n - s` with the parity flipped.
/// Recovers to the same signer.
pub fn malleate(signature: &Signature) -> Signature {
    Signature {
        r: signature.r,
        s: invert_s(&signature.s),
        v: if signature.v == 27 { 28 } else { 27 },
    }
}
