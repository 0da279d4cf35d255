use bench::apply_runtime_config_for_size;
use bench::default_rng;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use graph::DirectedGraph;
use graph::bfs_distances;
use graph::dijkstra;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_024, 16_384, 131_072];
const EDGE_FACTOR: usize = 4;
const C_MAX: u64 = 1_000_000_000;

fn generate_graph<R: Rng + ?Sized>(rng: &mut R, n: usize) -> DirectedGraph {
    let mut edges = Vec::with_capacity(n * EDGE_FACTOR);
    for v in 1..n {
        let parent = rng.random_range(0..v);
        edges.push((parent as u32, v as u32, rng.random_range(0..=C_MAX)));
    }
    while edges.len() < n * EDGE_FACTOR {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            edges.push((u as u32, v as u32, rng.random_range(0..=C_MAX)));
        }
    }
    DirectedGraph::from_undirected_edges(n, &edges)
}

fn bench_sssp(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("graph/sssp");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let g = generate_graph(&mut rng, size);

        group.bench_function(BenchmarkId::new("dijkstra", size), |bencher| {
            bencher.iter(|| black_box(dijkstra(black_box(&g), 0)))
        });
        group.bench_function(BenchmarkId::new("bfs", size), |bencher| {
            bencher.iter(|| black_box(bfs_distances(black_box(&g), 0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sssp);
criterion_main!(benches);
