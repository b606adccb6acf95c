//! # Signature Facade Benchmarks
//!
//! Cost of each facade call end to end, hex decoding and context lifecycle
//! included, next to the bare `k256` operation it wraps.
//!
//! Conditions:
//! - Compact and DER signatures
//! - Message sizes from one block to 16 KiB
//! - Malformed input that fails before the curve library is reached

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::Rng;
use shared_crypto::{encode_hex, sha256};
use signature_facade::{SignatureFacadeApi, SignatureFacadeService};
use std::time::Duration;

/// Generate test keypair
fn generate_keypair() -> (SigningKey, VerifyingKey) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let verifying_key = VerifyingKey::from(&signing_key);
    (signing_key, verifying_key)
}

/// Generate random printable message
fn generate_message(size: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Hex inputs for one signed message
struct SignedMessage {
    message: String,
    compact_hex: String,
    der_hex: String,
    recoverable_hex: String,
    digest_hex: String,
    public_key_hex: String,
}

impl SignedMessage {
    fn new(signing_key: &SigningKey, message: String) -> Self {
        let digest = sha256(message.as_bytes());
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(digest.as_bytes())
            .expect("signing failed");

        let compact = signature.to_bytes();
        let mut recoverable = compact.to_vec();
        recoverable.push(recovery_id.to_byte() + 27);

        Self {
            compact_hex: encode_hex(&compact),
            der_hex: encode_hex(signature.to_der().as_bytes()),
            recoverable_hex: encode_hex(&recoverable),
            digest_hex: digest.to_hex(),
            public_key_hex: encode_hex(
                signing_key.verifying_key().to_encoded_point(true).as_bytes(),
            ),
            message,
        }
    }
}

pub fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade/verify");
    group.measurement_time(Duration::from_secs(10));

    let service: SignatureFacadeService = SignatureFacadeService::default();
    let (signing_key, verifying_key) = generate_keypair();
    let signed = SignedMessage::new(&signing_key, generate_message(256));

    group.bench_function("compact", |b| {
        b.iter(|| {
            black_box(service.verify_signature(
                &signed.message,
                &signed.compact_hex,
                &signed.public_key_hex,
            ))
        })
    });

    group.bench_function("der", |b| {
        b.iter(|| {
            black_box(service.verify_signature(
                &signed.message,
                &signed.der_hex,
                &signed.public_key_hex,
            ))
        })
    });

    // Baseline: the curve operation alone
    let digest = sha256(signed.message.as_bytes());
    let signature = k256::ecdsa::Signature::from_der(
        &shared_crypto::decode_hex(&signed.der_hex).expect("valid hex"),
    )
    .expect("valid DER");
    group.bench_function("k256_verify_prehash", |b| {
        b.iter(|| black_box(verifying_key.verify_prehash(digest.as_bytes(), &signature).is_ok()))
    });

    let sizes = [64, 1024, 16 * 1024];
    for size in sizes {
        let signed = SignedMessage::new(&signing_key, generate_message(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("msg_size", size), &signed, |b, s| {
            b.iter(|| {
                black_box(service.verify_signature(&s.message, &s.compact_hex, &s.public_key_hex))
            })
        });
    }

    group.finish();
}

pub fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade/recover");
    group.measurement_time(Duration::from_secs(10));

    let service: SignatureFacadeService = SignatureFacadeService::default();
    let (signing_key, _) = generate_keypair();
    let signed = SignedMessage::new(&signing_key, generate_message(256));

    for release in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("release_context", release),
            &release,
            |b, &release| {
                b.iter(|| {
                    black_box(service.recover_public_key(
                        &signed.recoverable_hex,
                        &signed.digest_hex,
                        release,
                    ))
                })
            },
        );
    }

    group.finish();
}

pub fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade/rejections");

    let service: SignatureFacadeService = SignatureFacadeService::default();
    let (signing_key, _) = generate_keypair();
    let signed = SignedMessage::new(&signing_key, generate_message(64));

    // All of these fail before a context is created
    group.bench_function("invalid_hex", |b| {
        b.iter(|| black_box(service.verify_signature(&signed.message, "zz", &signed.public_key_hex)))
    });

    let short = "ab".repeat(10);
    group.bench_function("invalid_format", |b| {
        b.iter(|| black_box(service.verify_signature(&signed.message, &short, &signed.public_key_hex)))
    });

    let bad_marker = format!("{}1f", &signed.recoverable_hex[..128]);
    group.bench_function("invalid_recovery_id", |b| {
        b.iter(|| black_box(service.recover_public_key(&bad_marker, &signed.digest_hex, false)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_verify(c);
    bench_recover(c);
    bench_rejections(c);
}
