//! # Signer-Set Hijack Attempts

#[cfg(test)]
mod tests {
    use crate::fixtures::{outsider, Wallet};
    use dc_02_authorization::prelude::*;

    #[test]
    fn test_rotate_in_existing_signer_to_shrink_set() {
        let w = Wallet::with_verified(&[0, 1]);
        // Replacing D with A would leave only three distinct signers
        let rot = w.rotation(w.signers[3], w.signers[0]);
        let sig = w.sign(1, &rot.operation_hash());
        assert_eq!(
            w.service.transfer_signership(w.signers[0], &rot, &sig),
            Err(WalletError::NewSignerAlreadyExists(w.signers[0]))
        );
        assert_eq!(w.service.signers().len(), SIGNER_COUNT);
    }

    #[test]
    fn test_rotate_out_non_signer_to_grow_set() {
        let w = Wallet::with_verified(&[0, 1]);
        let rot = w.rotation(outsider(0x01), outsider(0x66));
        let sig = w.sign(1, &rot.operation_hash());
        assert_eq!(
            w.service.transfer_signership(w.signers[0], &rot, &sig),
            Err(WalletError::OldSignerNotAllowed(outsider(0x01)))
        );
        assert_eq!(w.service.signers().len(), SIGNER_COUNT);
    }

    #[test]
    fn test_tampered_new_signer_rejected() {
        let w = Wallet::with_verified(&[0, 1]);
        let rot = w.rotation(w.signers[3], outsider(0x10));
        let sig = w.sign(1, &rot.operation_hash());

        let mut tampered = rot.clone();
        tampered.new_signer = outsider(0x66);
        assert!(w
            .service
            .transfer_signership(w.signers[0], &tampered, &sig)
            .is_err());
        assert!(!w.service.is_allowed(&outsider(0x66)));
        assert!(w.service.is_allowed(&w.signers[3]));
    }

    #[test]
    fn test_rotated_out_cosigner_signature_dead() {
        let w = Wallet::with_verified(&[0, 1, 2]);
        let rot = w.rotation(w.signers[1], outsider(0x10));
        let sig = w.sign(2, &rot.operation_hash());
        w.service
            .transfer_signership(w.signers[0], &rot, &sig)
            .unwrap();

        // B was verified before removal; its key is now worthless
        let op = w.transfer(outsider(0x66), 1);
        let sig_b = w.sign(1, &op.operation_hash());
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig_b),
            Err(WalletError::SignerNotAllowed(w.signers[1]))
        );
    }

    #[test]
    fn test_removed_signer_cannot_rejoin_verified() {
        let w = Wallet::with_verified(&[0, 1, 2]);
        let rot = w.rotation(w.signers[1], outsider(0x10));
        let sig = w.sign(2, &rot.operation_hash());
        w.service
            .transfer_signership(w.signers[0], &rot, &sig)
            .unwrap();

        // Rotate B back in: it starts unverified again
        let rot = w.rotation(outsider(0x10), w.signers[1]);
        let sig = w.sign(2, &rot.operation_hash());
        w.service
            .transfer_signership(w.signers[0], &rot, &sig)
            .unwrap();
        assert_eq!(
            w.service.signer_state(&w.signers[1]),
            SignerState::AllowedUnverified
        );
    }
}
