use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use min_vertex_cover::generator::random_connected_graph;

fn exact_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(412);
    let graph = random_connected_graph(&mut rng, 16, 30);
    c.bench_function("exact_16_nodes", |b| {
        b.iter(|| {
            let cover = graph.exact_cover();
            assert!(graph.is_cover(&cover));
        })
    });
}

fn approx_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(412);
    for (vertex_count, edge_count) in [(50, 100), (200, 400)] {
        let graph = random_connected_graph(&mut rng, vertex_count, edge_count);
        c.bench_function(&format!("approx_{}_nodes", vertex_count), |b| {
            b.iter(|| {
                let cover = graph.approximate_cover();
                assert!(graph.is_cover(&cover));
            })
        });
    }
}

criterion_group!(benches, exact_benchmark, approx_benchmark);
criterion_main!(benches);
