use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::ApplyOptions;

// ====================================================================================
// --- Configuration: sizes covering the cache hierarchy ---
// ====================================================================================

/// Vector sizes chosen to test performance across different CPU cache levels.
///
/// *   4 KiB: fits in L1. Tests raw compute.
/// *   64 KiB: pushes the limits of L1, starts involving L2.
/// *   1 MiB: fits in L2 but not L1.
/// *   16 MiB: exceeds most L2 caches, fits in L3.
const VECTOR_SIZES: &[usize] = &[1024, 16 * 1024, 256 * 1024, 4 * 1024 * 1024];

const DISPATCHED: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: true,
};
const SCALAR: ApplyOptions = ApplyOptions {
    disable_simd: true,
    ignore_errors: true,
};
const CHECKED: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: false,
};

/// Generates pseudo-random input. A fixed seed keeps the data identical
/// across runs so results stay comparable over time.
fn random_f32(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random::<f32>()).collect()
}

fn random_i32(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn all_benchmarks(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("add_f32");
        group.throughput(Throughput::Bytes(
            size as u64 * std::mem::size_of::<f32>() as u64,
        ));

        let a = random_f32(size);
        let b = random_f32(size);
        let mut out = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("dispatched", size), &size, |bencher, _| {
            bencher.iter(|| {
                lanewise::add::array_array_into(
                    black_box(&a),
                    black_box(&b),
                    black_box(&mut out),
                    DISPATCHED,
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |bencher, _| {
            bencher.iter(|| {
                lanewise::add::array_array_into(
                    black_box(&a),
                    black_box(&b),
                    black_box(&mut out),
                    SCALAR,
                )
                .unwrap()
            })
        });

        group.finish();
    }

    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("add_scalar_i32_checked");
        group.throughput(Throughput::Bytes(
            size as u64 * std::mem::size_of::<i32>() as u64,
        ));

        let a = random_i32(size);
        let mut out = vec![0i32; size];

        group.bench_with_input(BenchmarkId::new("dispatched", size), &size, |bencher, _| {
            bencher.iter(|| {
                lanewise::add::array_scalar_into(
                    black_box(&a),
                    black_box(7),
                    black_box(&mut out),
                    CHECKED,
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |bencher, _| {
            bencher.iter(|| {
                lanewise::add::array_scalar_into(
                    black_box(&a),
                    black_box(7),
                    black_box(&mut out),
                    ApplyOptions {
                        disable_simd: true,
                        ignore_errors: false,
                    },
                )
                .unwrap()
            })
        });

        group.finish();
    }

    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("reductions_i32");
        group.throughput(Throughput::Bytes(
            size as u64 * std::mem::size_of::<i32>() as u64,
        ));

        let a = random_i32(size);

        group.bench_with_input(BenchmarkId::new("max_dispatched", size), &size, |bencher, _| {
            bencher.iter(|| lanewise::max(black_box(&a), DISPATCHED))
        });

        group.bench_with_input(BenchmarkId::new("max_scalar", size), &size, |bencher, _| {
            bencher.iter(|| lanewise::max(black_box(&a), SCALAR))
        });

        group.bench_with_input(BenchmarkId::new("any_miss", size), &size, |bencher, _| {
            bencher.iter(|| {
                lanewise::any(
                    lanewise::CompareOp::Eq,
                    black_box(&a),
                    black_box(2_000_000),
                    DISPATCHED,
                )
            })
        });

        group.finish();
    }
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
