//! # Integration Tests
//!
//! End-to-end flows through `WalletService` with real secp256k1 signatures.
