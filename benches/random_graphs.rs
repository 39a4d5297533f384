use chord_and_cover::cover_instance::CoverInstance;
use chord_and_cover::testing::random_graph;
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_random_graph(c: &mut Criterion, name: &str, n: usize, edge_prob: f64, seed: u64) {
    let graph = random_graph(n, edge_prob, seed);

    c.bench_function(name, |b| {
        b.iter(|| {
            let mut instance = CoverInstance::new(graph.clone());
            let cover = instance.solve().expect("the pipeline is total on simple graphs");
            assert!(instance.validate_solution(&cover));
        })
    });
}

fn pipeline_benchmark(c: &mut Criterion) {
    benchmark_random_graph(c, "sparse_12", 12, 0.2, 17);
    benchmark_random_graph(c, "medium_14", 14, 0.3, 18);
    benchmark_random_graph(c, "dense_10", 10, 0.5, 19);
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
