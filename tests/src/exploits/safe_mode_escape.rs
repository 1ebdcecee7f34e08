//! # Safe-Mode Escape Attempts
//!
//! After lockdown, two colluding signers may still move funds only among
//! themselves or back to the wallet.

#[cfg(test)]
mod tests {
    use crate::fixtures::{outsider, Service, Wallet, NOW, WALLET};
    use dc_02_authorization::prelude::*;

    #[test]
    fn test_drain_to_outsider_blocked() {
        let w = Wallet::with_verified(&[0, 1]);
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        let op = w.transfer(outsider(0x66), 1_000);
        let sig = w.sign(1, &op.operation_hash());
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::DestinationNotAllowed(outsider(0x66)))
        );
    }

    #[test]
    fn test_drain_via_forwarder_blocked() {
        let w = Wallet::with_verified(&[0, 1]);
        let forwarder = w.service.create_forwarder(w.signers[0]).unwrap();
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        let op = w.transfer(forwarder, 1_000);
        let sig = w.sign(1, &op.operation_hash());
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::DestinationNotAllowed(forwarder))
        );
    }

    #[test]
    fn test_rotate_in_accomplice_then_pay_it_blocked() {
        let w = Wallet::with_verified(&[0, 1, 2]);
        w.service.activate_safe_mode(w.signers[2]).unwrap();

        // Rotation itself is allowed in safe mode
        let accomplice = outsider(0x66);
        let rot = w.rotation(w.signers[3], accomplice);
        let sig = w.sign(1, &rot.operation_hash());
        w.service
            .transfer_signership(w.signers[0], &rot, &sig)
            .unwrap();

        // The accomplice never verifies, so it cannot receive
        let op = w.transfer(accomplice, 1_000);
        let sig = w.sign(1, &op.operation_hash());
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::DestinationNotVerified(accomplice))
        );
    }

    #[test]
    fn test_pay_bystander_signer_blocked() {
        let w = Wallet::with_verified(&[0, 1, 2, 3]);
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        let op = w.transfer(w.signers[3], 1);
        let sig = w.sign(1, &op.operation_hash());
        assert_eq!(
            w.service.send_multisig(w.signers[0], &op, &sig),
            Err(WalletError::DestinationNotParticipant(w.signers[3]))
        );
    }

    #[test]
    fn test_wallet_self_transfer_allowed() {
        let w = Wallet::with_verified(&[0, 1]);
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        let op = w.transfer(WALLET, 1);
        let sig = w.sign(1, &op.operation_hash());
        assert!(w.service.send_multisig(w.signers[0], &op, &sig).is_ok());
    }

    #[test]
    fn test_signer_cannot_double_as_wallet_identity() {
        // A signer posing as the wallet would turn the self-transfer
        // exemption into an unrestricted drain.
        let w = Wallet::new();
        let config = WalletConfig::new(w.signers[2], w.signers.clone());
        let result = Service::from_config(
            &config,
            Secp256k1Recovery,
            InMemoryLedger::new(),
            ManualClock::new(NOW),
        );
        assert!(matches!(result, Err(WalletError::WalletIsSigner(s)) if s == w.signers[2]));

        let zero = WalletConfig::new(Address::ZERO, w.signers.clone());
        assert!(matches!(
            WalletState::from_config(&zero),
            Err(WalletError::ZeroWalletAddress)
        ));
    }

    #[test]
    fn test_rotate_wallet_identity_in_blocked() {
        let w = Wallet::with_verified(&[0, 1]);
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        let rot = w.rotation(w.signers[3], WALLET);
        let sig = w.sign(1, &rot.operation_hash());
        assert_eq!(
            w.service.transfer_signership(w.signers[0], &rot, &sig),
            Err(WalletError::WalletIsSigner(WALLET))
        );
        assert!(w.service.is_allowed(&w.signers[3]));
        assert!(!w.service.is_allowed(&WALLET));
        assert_eq!(w.service.next_sequence_id(), 1);
    }

    #[test]
    fn test_no_deactivation_path() {
        let w = Wallet::with_verified(&[0, 1, 2, 3]);
        w.service.activate_safe_mode(w.signers[0]).unwrap();
        for i in 0..4 {
            w.service.activate_safe_mode(w.signers[i]).unwrap();
            w.service.verify_signer(w.signers[i]).unwrap();
        }
        assert!(w.service.is_safe_mode());
    }

    #[test]
    fn test_unverified_signer_cannot_trigger_lockdown() {
        let w = Wallet::new();
        assert_eq!(
            w.service.activate_safe_mode(w.signers[0]),
            Err(WalletError::NotVerified(w.signers[0]))
        );
        assert!(!w.service.is_safe_mode());
    }
}
