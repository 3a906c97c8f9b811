// Insert and search benchmarks for the strata graph index
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use strata::prelude::*;

fn generate_random_vector(rng: &mut StdRng, dim: usize) -> Vec<f64> {
    (0..dim).map(|_| rng.random_range(-1.0f64..1.0f64)).collect()
}

fn build_index(size: usize, dim: usize, max_level: usize) -> HnswIndex {
    let mut rng = StdRng::seed_from_u64(42);
    let config = HnswConfig::with_max_level(max_level).seed(7);
    let mut index = HnswIndex::with_config(config).expect("valid config");
    for _ in 0..size {
        index
            .insert(generate_random_vector(&mut rng, dim))
            .expect("insert");
    }
    index
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(10);

    for size in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("strata", size), size, |b, &size| {
            b.iter(|| black_box(build_index(size, 64, 4)));
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1000, 5000].iter() {
        let index = build_index(*size, 64, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let queries: Vec<Vec<f64>> = (0..100).map(|_| generate_random_vector(&mut rng, 64)).collect();

        group.bench_with_input(BenchmarkId::new("strata", size), size, |b, _| {
            let mut i = 0;
            b.iter(|| {
                let query = &queries[i % queries.len()];
                i += 1;
                black_box(index.search(query).expect("search"))
            });
        });
    }

    group.finish();
}

fn benchmark_cosine(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let a = generate_random_vector(&mut rng, 768);
    let b = generate_random_vector(&mut rng, 768);

    c.bench_function("cosine_similarity_768", |bench| {
        bench.iter(|| black_box(cosine_similarity(black_box(&a), black_box(&b)).expect("cosine")))
    });
}

criterion_group!(benches, benchmark_insert, benchmark_search, benchmark_cosine);
criterion_main!(benches);
