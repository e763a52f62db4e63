// Benchmarks for engine build and query over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dupex_core::RawEntry;
use dupex_similarity::{DupeEngine, EngineConfig};
use rand::prelude::*;

const NOTE_POOL: &[&str] = &[
    "bergamot", "pepper", "ambroxan", "lavender", "vetiver", "cedar", "amber",
    "vanilla", "tonka", "oud", "rose", "jasmine", "patchouli", "musk",
    "sandalwood", "leather", "tobacco", "mint", "apple", "citrus", "neroli",
    "saffron", "iris", "cardamom", "pineapple", "blackcurrant", "coumarin",
    "oakmoss", "incense", "benzoin", "cinnamon", "ginger",
];

fn generate_entry(id: usize, rng: &mut impl Rng) -> RawEntry {
    let count = rng.random_range(4..10);
    let notes: Vec<&str> = (0..count)
        .map(|_| NOTE_POOL[rng.random_range(0..NOTE_POOL.len())])
        .collect();

    RawEntry::new(format!("fragrance {}", id), format!("brand {}", id % 50))
        .with_notes(notes.join(", "))
        .with_rating_count(rng.random_range(0..5000))
}

fn generate_catalog(size: usize) -> Vec<RawEntry> {
    let mut rng = rand::rng();
    (0..size).map(|id| generate_entry(id, &mut rng)).collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10000].iter() {
        let entries = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("dupex", size), size, |b, _| {
            b.iter(|| {
                let engine =
                    DupeEngine::new(black_box(entries.clone()), EngineConfig::default()).unwrap();
                black_box(engine);
            });
        });
    }

    group.finish();
}

fn benchmark_find_similar(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_similar");

    // Setup: build one engine over 10k entries
    let engine = DupeEngine::new(generate_catalog(10_000), EngineConfig::default()).unwrap();

    group.bench_function("dupex_resolved_query", |b| {
        b.iter(|| {
            let results = engine.find_similar(black_box("fragrance 42"), 10).unwrap();
            black_box(results);
        });
    });

    group.bench_function("dupex_free_text_query", |b| {
        b.iter(|| {
            let results = engine
                .find_similar_text(black_box("bergamot amber musk"), 10)
                .unwrap();
            black_box(results);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_find_similar);
criterion_main!(benches);
