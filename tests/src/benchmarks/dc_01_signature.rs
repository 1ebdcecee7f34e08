//! # DC-01 Signature Recovery Benchmarks
//!
//! - Keccak-256 over typical operation preimages
//! - Parsing the 65-byte wire form
//! - Recovery for low-S and folded high-S signatures
//! - Adversarial blobs that must fail fast

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dc_01_signature_recovery::test_helpers::{generate_keypair, malleate, sign_hash};
use dc_01_signature_recovery::{keccak256, recover_signer, Secp256k1Verifier, Signature};
use rand::Rng;
use std::time::Duration;

fn random_bytes(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

pub fn bench_keccak(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-01/keccak256");
    for size in [104usize, 256, 1024, 4096] {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(keccak256(data)));
        });
    }
    group.finish();
}

pub fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-01/recovery");
    group.measurement_time(Duration::from_secs(10));

    let (key, _) = generate_keypair();
    let hash = keccak256(b"benchmark operation");
    let low = sign_hash(&hash, &key);
    let high = malleate(&low);
    let wire = low.to_bytes();

    group.bench_function("parse_wire", |b| {
        b.iter(|| black_box(Signature::from_slice(black_box(&wire))))
    });
    group.bench_function("recover_low_s", |b| {
        b.iter(|| black_box(recover_signer(&hash, &low)))
    });
    group.bench_function("recover_high_s_folded", |b| {
        b.iter(|| black_box(recover_signer(&hash, &high)))
    });

    let verifier = Secp256k1Verifier::new();
    group.bench_function("verifier_from_wire", |b| {
        b.iter(|| black_box(verifier.recover(&hash, &wire)))
    });
    group.finish();
}

pub fn bench_adversarial(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc-01/adversarial");
    let hash = keccak256(b"benchmark operation");
    let verifier = Secp256k1Verifier::new();

    let mut zero = [0u8; 65];
    zero[64] = 27;
    let mut max = [0xFFu8; 65];
    max[64] = 28;
    let short = [0u8; 64];

    group.bench_function("zero_scalars", |b| {
        b.iter(|| black_box(verifier.recover(&hash, &zero)))
    });
    group.bench_function("scalars_above_order", |b| {
        b.iter(|| black_box(verifier.recover(&hash, &max)))
    });
    group.bench_function("wrong_length", |b| {
        b.iter(|| black_box(verifier.recover(&hash, &short)))
    });
    group.finish();
}
