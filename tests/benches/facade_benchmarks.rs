//! # Signature Facade Benchmarks
//!
//! | Operation | Measured |
//! |-----------|----------|
//! | verify | compact, DER, message size, bare `k256` baseline |
//! | recover | with and without early context release |
//! | rejections | malformed input that never reaches the curve library |

use criterion::{criterion_group, criterion_main, Criterion};
use facade_tests::benchmarks::signature_facade;

fn facade_benchmarks(c: &mut Criterion) {
    signature_facade::register_benchmarks(c);
}

criterion_group!(benches, facade_benchmarks);
criterion_main!(benches);
