use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use splay_set::SplaySet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn keys() -> Vec<u32> {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let keys = keys();
    let set = keys.iter().cloned().collect::<BTreeSet<u32>>();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_splay_set_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench splay set insert", move |b| {
        b.iter(|| {
            let mut set = SplaySet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_splay_set_contains(c: &mut Criterion) {
    let keys = keys();
    let mut set = keys.iter().cloned().collect::<SplaySet<u32>>();
    c.bench_function("bench splay set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

// Repeated access to a small working set is where splaying pays off.
fn bench_splay_set_contains_hot(c: &mut Criterion) {
    let keys = keys();
    let hot = keys[..16].to_vec();
    let mut set = keys.iter().cloned().collect::<SplaySet<u32>>();
    c.bench_function("bench splay set contains hot", move |b| {
        b.iter(|| {
            for key in &hot {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_splay_set_min_max(c: &mut Criterion) {
    let mut set = keys().into_iter().collect::<SplaySet<u32>>();
    c.bench_function("bench splay set min max", move |b| {
        b.iter(|| {
            black_box(set.min().cloned());
            black_box(set.max().cloned());
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_splay_set_insert,
    bench_splay_set_contains,
    bench_splay_set_contains_hot,
    bench_splay_set_min_max,
);
criterion_main!(benches);
