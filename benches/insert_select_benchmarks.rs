use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use osrb_tree::{Gender, OSRBTree, Rank};
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn gender_of(i: usize) -> Gender {
    if i % 2 == 0 { Gender::Male } else { Gender::Female }
}

fn ordered_keys(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<u64> {
    (0..n as u64).rev().collect()
}

fn random_keys(n: usize) -> Vec<u64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push(x >> 33);
    }
    keys
}

fn build(keys: &[u64]) -> OSRBTree<u64, u64> {
    let mut tree = OSRBTree::with_capacity(keys.len());
    for (i, &key) in keys.iter().enumerate() {
        tree.insert(key, gender_of(i), key);
    }
    tree
}

// ─── Insertion ──────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for (name, keys) in [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ] {
        group.bench_with_input(BenchmarkId::new(name, N), &keys, |b, keys| {
            b.iter(|| build(black_box(keys)));
        });
    }

    group.finish();
}

// ─── Rank selection ─────────────────────────────────────────────────────────

fn bench_find_with_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_with_rank");
    let tree = build(&random_keys(N));

    for gender in Gender::ALL {
        let count = tree.count(gender);
        group.bench_function(BenchmarkId::new(gender.to_string(), N), |b| {
            b.iter(|| {
                for rank in (0..count).step_by(97) {
                    black_box(tree.find_with_rank(gender, Rank(rank)).is_ok());
                }
            });
        });
    }

    group.bench_function(BenchmarkId::new("iter_linear_scan", N), |b| {
        b.iter(|| {
            for rank in (0..tree.count(Gender::Female)).step_by(97) {
                black_box(tree.iter().filter(|node| node.gender() == Gender::Female).nth(rank));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_find_with_rank);
criterion_main!(benches);
