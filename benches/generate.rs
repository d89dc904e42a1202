//! Random formula generation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench generate
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use randformula::alphabet::ExplicitAlphabet;
use randformula::generator::{FormulaGenerator, GeneratorConfig, NullaryPolicy};
use randformula::operator::Connective;

// ============================================================================
// Benchmark: Height scaling (binary connectives double the tree each level)
// ============================================================================

fn bench_height_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/height");

    let alphabet = ExplicitAlphabet::new((1..=16).map(|i| format!("x{}", i)));
    let generator = FormulaGenerator::default();

    for height in [2usize, 4, 8, 12] {
        group.bench_with_input(BenchmarkId::new("base", height), &height, |b, &height| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| generator.generate(height, &alphabet, &Connective::BASE, &mut rng));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Batch sampling from a single generator
// ============================================================================

fn bench_sample_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/sample");

    let alphabet = ExplicitAlphabet::new(["p", "q", "r"]);
    let generator = FormulaGenerator::new(GeneratorConfig::default().with_nullary(NullaryPolicy::Allow));
    let operators = [Connective::Top, Connective::Bottom, Connective::Not, Connective::And, Connective::Or];

    for count in [100usize, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("h=5", count), &count, |b, &count| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| generator.sample(count, 5, &alphabet, &operators, &mut rng));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Seeded generation (includes generator construction)
// ============================================================================

fn bench_seeded(c: &mut Criterion) {
    let alphabet = ExplicitAlphabet::new(["p", "q"]);
    let generator = FormulaGenerator::default();

    c.bench_function("generate/seeded_h=6", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            generator.generate_with(6, &alphabet, &Connective::MODAL, seed)
        });
    });
}

criterion_group!(benches, bench_height_scaling, bench_sample_batch, bench_seeded);

criterion_main!(benches);
