//! # DC-02 Authorization Benchmarks
//!
//! - Operation hashing with growing payloads
//! - Full `send_multisig` path (authorize, consume, deliver, event)
//! - Rejection paths that stop before signature recovery

use crate::fixtures::{outsider, Wallet};
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use dc_01_signature_recovery::test_helpers::{generate_keypair, sign_hash_bytes};
use dc_02_authorization::prelude::*;

pub fn bench_operation_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-02/operation_hash");
    for size in [0usize, 64, 1024, 16 * 1024] {
        let op = ValueTransfer {
            to: outsider(0x42),
            value: U256::from(1_000u64),
            data: vec![0xAB; size],
            expire_time: 1_700_000_000,
            sequence_id: 1,
        };
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("transact", size), &op, |b, op| {
            b.iter(|| black_box(op.operation_hash()))
        });
    }

    let rot = SignerRotation {
        old_signer: outsider(1),
        new_signer: outsider(2),
        expire_time: 1_700_000_000,
        sequence_id: 1,
    };
    group.bench_function("xfersign", |b| b.iter(|| black_box(rot.operation_hash())));
    group.finish();
}

pub fn bench_send_multisig(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-02/send_multisig");
    let w = Wallet::with_verified(&[0, 1]);
    let requester = w.signers[0];

    group.bench_function("accepted", |b| {
        b.iter_batched(
            || {
                let op = w.transfer(outsider(0x42), 1);
                let sig = w.sign(1, &op.operation_hash());
                (op, sig)
            },
            |(op, sig)| black_box(w.service.send_multisig(requester, &op, &sig)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-02/rejections");
    let w = Wallet::with_verified(&[0, 1]);
    let requester = w.signers[0];

    let mut stale = w.transfer(outsider(0x42), 1);
    stale.sequence_id = 0;
    let stale_sig = w.sign(1, &stale.operation_hash());
    group.bench_function("bad_sequence", |b| {
        b.iter(|| black_box(w.service.send_multisig(requester, &stale, &stale_sig)))
    });

    let op = w.transfer(outsider(0x42), 1);
    let (rogue, _) = generate_keypair();
    let rogue_sig = sign_hash_bytes(&op.operation_hash(), &rogue);
    group.bench_function("rogue_cosigner", |b| {
        b.iter(|| black_box(w.service.send_multisig(requester, &op, &rogue_sig)))
    });

    let self_sig = w.sign(0, &op.operation_hash());
    group.bench_function("self_cosign", |b| {
        b.iter(|| black_box(w.service.send_multisig(requester, &op, &self_sig)))
    });
    group.finish();
}
