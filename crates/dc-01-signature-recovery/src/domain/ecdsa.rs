//! # ECDSA Signer Recovery (secp256k1)
//!
//! Pure domain logic for recovering the identity behind a detached signature.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Constant-Time Operations**: Uses `subtle` crate for scalar comparisons
//! - **High-S Folding**: `(r, s, v)` and `(r, n - s, v ^ 1)` recover the same
//!   key, so high S is folded before handing the signature to k256
//! - Uses k256 crate for cryptographic operations

use super::entities::Signature;
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature as K256Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// VERIFIER
// =============================================================================

/// Stateless secp256k1 signer recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw 65-byte blob and recover the signer.
    pub fn recover(&self, message_hash: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
        let signature = Signature::from_slice(signature)?;
        recover_signer(message_hash, &signature)
    }

    /// Recover the signer of an already-decoded signature.
    pub fn recover_signer(
        &self,
        message_hash: &Hash,
        signature: &Signature,
    ) -> Result<Address, SignatureError> {
        recover_signer(message_hash, signature)
    }
}

// =============================================================================
// CORE RECOVERY
// =============================================================================

/// Recover the signer's address from a prehashed message and signature.
///
/// Validations performed:
/// 1. R is in valid range [1, n-1]
/// 2. S is in valid range [1, n-1]
/// 3. High S is folded to n - S with the parity flipped
/// 4. Public key recovery succeeds
pub fn recover_signer(message_hash: &Hash, signature: &Signature) -> Result<Address, SignatureError> {
    use zeroize::Zeroize;

    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::InvalidScalar);
    }

    let parity = signature.parity()?;
    let (s, parity) = if is_low_s(&signature.s) {
        (signature.s, parity)
    } else {
        (invert_s(&signature.s), parity ^ 1)
    };

    let recovery_id =
        RecoveryId::from_byte(parity).ok_or(SignatureError::InvalidRecoveryId(signature.v))?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&s);
    let parsed = K256Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| SignatureError::InvalidScalar)?;

    let recovered_key =
        VerifyingKey::recover_from_prehash(message_hash.as_bytes(), &sig, recovery_id)
            .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash::new(hasher.finalize().into())
}

/// Derive the 20-byte address from a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 of the public key without the 0x04 prefix
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash.as_bytes()[12..]);
    Address::new(address)
}

/// Check if S value is in the lower half of the curve order (S <= n/2).
///
/// Constant-time comparison, no early exit.
fn is_low_s(s: &[u8; 32]) -> bool {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for (s_byte, h_byte) in s.iter().zip(SECP256K1_HALF_ORDER.iter()) {
        let not_decided = !(less | greater);
        less |= not_decided & Choice::from(u8::from(s_byte < h_byte));
        greater |= not_decided & Choice::from(u8::from(s_byte > h_byte));
    }

    (!greater).into()
}

/// Check if a scalar value is in valid range [1, n-1].
///
/// Constant-time comparison, no early exit.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for (s_byte, n_byte) in scalar.iter().zip(SECP256K1_ORDER.iter()) {
        let not_decided = !(less | greater);
        less |= not_decided & Choice::from(u8::from(s_byte < n_byte));
        greater |= not_decided & Choice::from(u8::from(s_byte > n_byte));
    }

    (!is_zero & less).into()
}

/// Compute n - s.
pub(crate) fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = i32::from(SECP256K1_ORDER[i]) - i32::from(s[i]) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

// =============================================================================
// UNIT TESTS
// =============================================================================
