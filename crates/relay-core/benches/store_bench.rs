use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use relay_core::PlaylistStore;

/// Crea un playlist de prueba con N canales
fn create_test_playlist(channels: usize) -> String {
    let mut body = String::from("#EXTM3U\n");
    for i in 0..channels {
        body.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"ch{i}\",Channel {i}\nhttp://origin/live/{i}.ts\n"
        ));
    }
    body
}

/// Benchmark: Store get (populated)
fn bench_store_get_hit(c: &mut Criterion) {
    let store = PlaylistStore::new();
    store.set("news", create_test_playlist(500));

    c.bench_function("store_get_hit", |b| {
        b.iter(|| std::hint::black_box(store.get("news")));
    });
}

/// Benchmark: Store get (never populated)
fn bench_store_get_miss(c: &mut Criterion) {
    let store = PlaylistStore::new();

    c.bench_function("store_get_miss", |b| {
        b.iter(|| std::hint::black_box(store.get("missing")));
    });
}

/// Benchmark: Store set con diferentes tamanos de playlist
fn bench_store_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_set");

    for channels in [10, 100, 1000] {
        let store = PlaylistStore::new();
        let playlist = create_test_playlist(channels);

        group.throughput(Throughput::Bytes(playlist.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(channels),
            &playlist,
            |b, playlist| {
                b.iter(|| store.set("news", playlist.as_str()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_store_get_hit,
    bench_store_get_miss,
    bench_store_set
);
criterion_main!(benches);
