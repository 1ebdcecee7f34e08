//! # Signature Encoding Attacks

#[cfg(test)]
mod tests {
    use crate::fixtures::{outsider, Wallet};
    use dc_01_signature_recovery::{Signature, SignatureError};
    use dc_02_authorization::prelude::*;

    #[test]
    fn test_truncated_and_extended_blobs() {
        let w = Wallet::with_verified(&[0, 1]);
        let op = w.transfer(outsider(0x66), 1);
        let sig = w.sign(1, &op.operation_hash());

        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig[..64]),
            Err(WalletError::MalformedSignature(SignatureError::InvalidLength(64)))
        );
        let mut long = sig.clone();
        long.push(0);
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &long),
            Err(WalletError::MalformedSignature(SignatureError::InvalidLength(66)))
        );
        assert_eq!(w.service.next_sequence_id(), 1);
    }

    #[test]
    fn test_bad_recovery_id() {
        let w = Wallet::with_verified(&[0, 1]);
        let op = w.transfer(outsider(0x66), 1);
        let mut sig = w.sign(1, &op.operation_hash());
        sig[64] = 29;
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::MalformedSignature(
                SignatureError::InvalidRecoveryId(29)
            ))
        );
    }

    #[test]
    fn test_zero_signature() {
        let w = Wallet::with_verified(&[0, 1]);
        let op = w.transfer(outsider(0x66), 1);
        let mut sig = vec![0u8; 65];
        sig[64] = 27;
        assert!(matches!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::MalformedSignature(_))
        ));
    }

    #[test]
    fn test_raw_recovery_id_accepted() {
        let w = Wallet::with_verified(&[0, 1]);
        let op = w.transfer(outsider(0x66), 1);
        let mut sig = w.sign(1, &op.operation_hash());
        sig[64] -= 27;
        let receipt = w.service.send_multisig(w.signers[0], &op, &sig).unwrap();
        assert_eq!(receipt.co_signer, w.signers[1]);
    }

    #[test]
    fn test_high_s_twin_recovers_same_signer_but_not_twice() {
        let w = Wallet::with_verified(&[0, 1]);
        let op = w.transfer(outsider(0x66), 1);
        let sig = w.sign(1, &op.operation_hash());
        w.service.send_multisig(w.signers[0], &op, &sig).unwrap();

        // Malleated twin (n - s, flipped parity) is still the same operation
        let parsed = Signature::from_slice(&sig).unwrap();
        let twin = dc_01_signature_recovery::test_helpers::malleate(&parsed);
        assert!(matches!(
            w.service
                .send_multisig(w.signers[0], &op, &twin.to_bytes()),
            Err(WalletError::BadSequence { .. })
        ));
    }
}
