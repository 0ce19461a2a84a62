use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use radix_mutable::Trie;
use std::collections::HashMap;

const KEY_COUNT: usize = 10_000;

/// Path-like keys sharing long prefixes, e.g. `/api/v2/users/4821/posts`.
fn generate_keys(rng: &mut StdRng) -> Vec<String> {
    let sections = ["users", "posts", "comments", "tags", "media"];
    let mut keys: Vec<String> = (0..KEY_COUNT)
        .map(|_| {
            format!(
                "/api/v{}/{}/{}/{}",
                rng.gen_range(1..4),
                sections.choose(rng).unwrap(),
                rng.gen_range(0..5_000),
                sections.choose(rng).unwrap(),
            )
        })
        .collect();
    keys.sort();
    keys.dedup();
    keys.shuffle(rng);
    keys
}

fn build_trie(keys: &[String]) -> Trie<usize> {
    keys.iter().enumerate().map(|(i, k)| (k, i)).collect()
}

fn bench_find(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keys = generate_keys(&mut rng);
    let trie = build_trie(&keys);
    let map: HashMap<&str, usize> = keys.iter().enumerate().map(|(i, k)| (k.as_str(), i)).collect();

    c.bench_function("trie find hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(trie.find(&keys[i]))
        })
    });

    c.bench_function("trie find miss", |b| {
        b.iter(|| black_box(trie.find("/api/v9/unknown/route")))
    });

    c.bench_function("hashmap find hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(map.get(keys[i].as_str()))
        })
    });
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let keys = generate_keys(&mut rng);

    c.bench_function("trie insert all", |b| {
        b.iter(|| black_box(build_trie(&keys)))
    });
}

fn bench_remove(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let keys = generate_keys(&mut rng);
    let trie = build_trie(&keys);

    c.bench_function("trie remove all", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| {
                for key in &keys {
                    black_box(trie.remove(key));
                }
                trie
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_find, bench_insert, bench_remove);
criterion_main!(benches);
