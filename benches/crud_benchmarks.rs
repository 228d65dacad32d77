use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use leaftree::BPlusTreeMap;
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize, seed: u64) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = seed;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BPlusTreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BPlusTreeMap::new();
            for i in (0..N as i64).rev() {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in (0..N as i64).rev() {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N, 12345);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BPlusTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Point lookup ───────────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N, 12345);
    // Half the probes hit, half miss, like a mixed read workload.
    let probes: Vec<i64> = keys.iter().step_by(2).copied().chain(random_keys(N / 2, 777)).collect();
    let bp_map: BPlusTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in &probes {
                if let Some(&v) = bp_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in &probes {
                if let Some(&v) = bt_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N, 12345);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BPlusTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Scans ──────────────────────────────────────────────────────────────────

fn bench_range_scan(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let bp_map: BPlusTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let (lo, hi) = (N as i64 / 4, 3 * N as i64 / 4);

    let mut group = c.benchmark_group("range_scan");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| bp_map.range(&lo, &hi).map(|(_, &v)| v).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.range(lo..=hi).map(|(_, &v)| v).sum::<i64>());
    });

    group.finish();
}

fn bench_full_iteration(c: &mut Criterion) {
    let keys = random_keys(N, 12345);
    let bp_map: BPlusTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("full_iteration");

    group.bench_function(BenchmarkId::new("BPlusTreeMap", N), |b| {
        b.iter(|| bp_map.iter().map(|(_, &v)| v).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().map(|(_, &v)| v).sum::<i64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_reverse,
    bench_insert_random,
    bench_get_random,
    bench_remove_random,
    bench_range_scan,
    bench_full_iteration
);
criterion_main!(benches);
