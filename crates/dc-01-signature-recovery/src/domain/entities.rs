//! # Domain Entities
//!
//! Typed form of the detached co-signature.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};

/// Byte length of an encoded signature: `r || s || v`.
pub const SIGNATURE_LEN: usize = 65;

/// ECDSA signature on the secp256k1 curve.
///
/// `v` is always stored in the canonical `{27, 28}` domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (27 or 28)
    pub v: u8,
}

impl Signature {
    /// Parse a 65-byte blob, normalizing `v` from `{0, 1}` to `{27, 28}`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: &[u8; SIGNATURE_LEN] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength(bytes.len()))?;

        let (r_bytes, rest) = bytes.split_at(32);
        let (s_bytes, v_bytes) = rest.split_at(32);

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(r_bytes);
        s.copy_from_slice(s_bytes);

        let v = normalize_v(v_bytes[0])?;
        Ok(Self { r, s, v })
    }

    /// Encode back to the 65-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Recovery parity bit (0 or 1), accepting either `v` convention.
    pub fn parity(&self) -> Result<u8, SignatureError> {
        normalize_v(self.v).map(|v| v - 27)
    }
}

/// Map `v` into `{27, 28}`.
fn normalize_v(v: u8) -> Result<u8, SignatureError> {
    match v {
        0 | 1 => Ok(v + 27),
        27 | 28 => Ok(v),
        _ => Err(SignatureError::InvalidRecoveryId(v)),
    }
}
