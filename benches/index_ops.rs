//! Index engine benchmarks: tree vs hash insert and point lookup.
//!
//! Keys are generated deterministically so runs are comparable. The tree is
//! fed shuffled keys (sorted input would degenerate it into a list and
//! benchmark the pathological case instead of the typical one).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coindb::{Coin, CoinStore, HashIndex, Keyed, OrderedTree};

struct Entry {
    key: String,
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Deterministic key list in a scrambled (but fixed) order. Stepping by a
/// large prime modulo `n` avoids sorted input without pulling in an RNG.
fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("coin-{:05}", (i * 7919) % n)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[100usize, 1_000, 10_000] {
        let keys = keys(n);
        group.bench_with_input(BenchmarkId::new("tree", n), &keys, |b, keys| {
            b.iter(|| {
                let mut tree: OrderedTree<Entry> = OrderedTree::new();
                for key in keys {
                    tree.insert(Entry { key: key.clone() });
                }
                black_box(tree.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("hash", n), &keys, |b, keys| {
            b.iter(|| {
                let mut index: HashIndex<Entry> = HashIndex::with_expected(16);
                for key in keys {
                    index.insert(Entry { key: key.clone() });
                }
                black_box(index.len())
            });
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &n in &[100usize, 1_000, 10_000] {
        let keys = keys(n);

        let mut tree: OrderedTree<Entry> = OrderedTree::new();
        let mut index: HashIndex<Entry> = HashIndex::with_expected(n);
        for key in &keys {
            tree.insert(Entry { key: key.clone() });
            index.insert(Entry { key: key.clone() });
        }

        group.bench_with_input(BenchmarkId::new("tree", n), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0;
                for key in keys {
                    if tree.get(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
        group.bench_with_input(BenchmarkId::new("hash", n), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0;
                for key in keys {
                    if index.find(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_store_cycle(c: &mut Criterion) {
    c.bench_function("store/insert_remove_1000", |b| {
        let names = keys(1_000);
        b.iter(|| {
            let mut store = CoinStore::with_expected(1_000);
            for name in &names {
                store.insert(Coin::new(name.clone(), "SHA256", 1, 2009, 1.0, "Anon"));
            }
            for name in &names {
                black_box(store.remove(name));
            }
            black_box(store.len())
        });
    });
}

criterion_group!(benches, bench_insert, bench_find, bench_store_cycle);
criterion_main!(benches);
