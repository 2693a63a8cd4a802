use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use songbook::store::SongStore;
use songbook::types::{IdStrategy, Song};

fn seeded_store(size: usize) -> Arc<SongStore> {
    let seed = (1..=size as i64)
        .map(|id| Song::new(id, format!("Song {id}"), "Bench"))
        .collect();
    Arc::new(SongStore::new(seed, IdStrategy::Monotonic))
}

fn bench_song_store(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("song_store");

    for size in [10usize, 1_000, 10_000] {
        let store = seeded_store(size);

        group.bench_with_input(BenchmarkId::new("list", size), &size, |b, _| {
            b.to_async(&runtime).iter(|| {
                let store = store.clone();
                async move { store.list().await }
            });
        });

        // Worst case for the linear scan
        group.bench_with_input(BenchmarkId::new("get_last", size), &size, |b, &size| {
            b.to_async(&runtime).iter(|| {
                let store = store.clone();
                async move { store.get(size as i64).await }
            });
        });
    }

    let store = seeded_store(0);
    group.bench_function("create", |b| {
        b.to_async(&runtime).iter(|| {
            let store = store.clone();
            async move { store.create(Song::new(0, "New", "Bench")).await }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_song_store);
criterion_main!(benches);
