//! # Dual-Control Wallet Benchmarks
//!
//! | Area | Benchmark group |
//! |------|-----------------|
//! | Hashing | `dc-01/keccak256`, `dc-02/operation_hash` |
//! | Recovery | `dc-01/recovery`, `dc-01/adversarial` |
//! | Authorization | `dc-02/send_multisig`, `dc-02/rejections` |

use criterion::{criterion_group, criterion_main};
use dc_tests::benchmarks::{dc_01_signature, dc_02_wallet};

criterion_group!(
    recovery,
    dc_01_signature::bench_keccak,
    dc_01_signature::bench_recovery,
    dc_01_signature::bench_adversarial
);

criterion_group!(
    authorization,
    dc_02_wallet::bench_operation_hash,
    dc_02_wallet::bench_send_multisig,
    dc_02_wallet::bench_rejections
);

criterion_main!(recovery, authorization);
