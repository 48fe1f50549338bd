use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use seeded_hashtable::HashTable;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("hash_table_insert_10k", |b| {
        b.iter_batched(
            || HashTable::<u64>::new(4096).unwrap(),
            |mut t| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(key(x).as_bytes(), i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("hash_table_get_hit", |b| {
        let mut t = HashTable::new(8192).unwrap();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k.as_bytes(), i as u64).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k.as_bytes()).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("hash_table_get_miss", |b| {
        let mut t = HashTable::new(4096).unwrap();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.insert(key(x).as_bytes(), i as u64).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in the table
            let k = key(miss.next().unwrap());
            black_box(t.get(k.as_bytes()).is_err());
        })
    });
}

// Chain churn: insert then delete the same key so each round links and
// unlinks a chain head.
fn bench_insert_delete(c: &mut Criterion) {
    c.bench_function("hash_table_insert_delete", |b| {
        let mut t = HashTable::new(1024).unwrap();
        for (i, x) in lcg(3).take(2_000).enumerate() {
            t.insert(key(x).as_bytes(), i as u64).unwrap();
        }
        b.iter(|| {
            t.insert(b"churn", 1u64).unwrap();
            black_box(t.remove(b"churn").unwrap());
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_insert_delete
}
criterion_main!(benches);
