//! Criterion comparison of each IR program with its native twin.
//!
//! Both variants of a benchmark run on the same input, so the difference
//! between the two measurements is the cost of expressing the program in the IR.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use classir_bench::catalog;

fn bench_ir_vs_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("ir_vs_native");

    for bench in catalog() {
        let variants = [("ir", bench.ir), ("native", bench.native)];
        for (variant, program) in variants {
            group.bench_with_input(BenchmarkId::new(bench.name, variant), &bench.input, |b, &input| {
                b.iter(|| {
                    let (mut x, mut y) = black_box(input);
                    program(&mut x, &mut y);
                    black_box((x, y))
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_ir_vs_native);
criterion_main!(benches);
