use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spangraph::Graph;
use std::hint::black_box;

/// 随机稀疏无向图：先连成一条链保证连通，再随机补边
fn random_graph(vertices: u32, extra_edges: usize) -> Graph<u32, u32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::with_capacity(vertices as usize);
    for k in 0..vertices {
        graph.add(k, k);
    }
    for k in 1..vertices {
        graph.connect_with_weight(&(k - 1), &k, rng.gen_range(1.0..100.0));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        graph.connect_with_weight(&a, &b, rng.gen_range(1.0..100.0));
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for size in [1_000u32, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(random_graph(size, size as usize * 2)));
        });
    }
    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let graph = random_graph(5_000, 10_000);
    let target = 4_999;

    let mut group = c.benchmark_group("algorithms");
    group.bench_function("depth_first_traversal", |b| {
        b.iter(|| black_box(graph.depth_first_traversal(black_box(&0)).len()));
    });
    group.bench_function("breadth_first_traversal", |b| {
        b.iter(|| black_box(graph.breadth_first_traversal(black_box(&0)).len()));
    });
    group.bench_function("dij_shortest_path", |b| {
        b.iter(|| black_box(graph.dij_shortest_path(&0, &target).unwrap()));
    });
    group.bench_function("primms", |b| {
        b.iter(|| black_box(graph.primms(&0).unwrap().cost()));
    });
    group.bench_function("kruskals", |b| {
        b.iter(|| black_box(graph.kruskals(&0).unwrap().cost()));
    });
    group.finish();
}

criterion_group!(benches, bench_construction, bench_algorithms);
criterion_main!(benches);
