//! Benchmark for the X13 chained digest

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use x13_core::{ChainPipeline, StageKind};

fn bench_digest(c: &mut Criterion) {
    let input = b"benchmark input shaped like an eighty-byte block header padding..........";

    c.bench_function("x13_single", |b| {
        b.iter(|| x13_core::digest(black_box(input)))
    });
}

fn bench_digest_varying_input(c: &mut Criterion) {
    c.bench_function("x13_varying", |b| {
        let mut nonce: u64 = 0;
        b.iter(|| {
            let mut input = Vec::with_capacity(64);
            input.extend_from_slice(b"seed");
            input.extend_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            x13_core::digest(black_box(&input))
        })
    });
}

fn bench_stages(c: &mut Criterion) {
    let pipeline = ChainPipeline::new();
    let input = [0x5Au8; 64];

    c.bench_function("x13_pipeline", |b| {
        b.iter(|| pipeline.run(black_box(&input)))
    });

    let mut group = c.benchmark_group("x13_stage");
    for stage in StageKind::CHAIN {
        group.bench_function(stage.name(), |b| {
            b.iter(|| stage.compute(black_box(&input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_digest, bench_digest_varying_input, bench_stages);
criterion_main!(benches);
