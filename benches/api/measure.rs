use super::utils::{scrambled_keys, sequential_keys, SIZES};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use stdset_bench::{measure_with, Ignore};

pub fn measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("Measure");
    for size in SIZES {
        let sequential = sequential_keys(size);
        let scrambled = scrambled_keys(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("Sequential", size),
            &sequential,
            |b, keys| b.iter(|| measure_with(black_box(keys), &mut Ignore)),
        );
        group.bench_with_input(
            BenchmarkId::new("Scrambled", size),
            &scrambled,
            |b, keys| b.iter(|| measure_with(black_box(keys), &mut Ignore)),
        );
    }
    group.finish();
}

// Criterion drives the iteration count, each sample reports the time of a
// single phase as measured by the instrument itself.
pub fn phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("Phase");
    for size in SIZES {
        let keys = scrambled_keys(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("Insertion", size),
            &keys,
            |b, keys| b.iter_custom(|iters| run(keys, iters, |t| t.insertion)),
        );
        group.bench_with_input(
            BenchmarkId::new("Search", size),
            &keys,
            |b, keys| b.iter_custom(|iters| run(keys, iters, |t| t.search)),
        );
        group.bench_with_input(
            BenchmarkId::new("Deletion", size),
            &keys,
            |b, keys| b.iter_custom(|iters| run(keys, iters, |t| t.deletion)),
        );
    }
    group.finish();
}

fn run(
    keys: &[usize],
    iters: u64,
    phase: impl Fn(&stdset_bench::ElapsedTimes) -> f64,
) -> Duration {
    let millis = (0..iters)
        .map(|_| phase(&measure_with(black_box(keys), &mut Ignore).times))
        .sum::<f64>();
    Duration::from_secs_f64(millis / 1e3)
}
