//! Benchmarks for seeding and serializing style stores.
//!
//! Run with: cargo bench
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dotstyle::{attrs, GraphKind, GraphSeeder, StyleStore};
use petgraph::graphmap::DiGraphMap;

/// A layered graph where every node links to the next `fan_out` nodes.
fn layered_graph(nodes: u32, fan_out: u32) -> DiGraphMap<u32, ()> {
    let mut graph = DiGraphMap::new();
    for n in 0..nodes {
        graph.add_node(n);
        for step in 1..=fan_out {
            if n + step < nodes {
                graph.add_edge(n, n + step, ());
            }
        }
    }
    graph
}

fn styled_store(graph: &DiGraphMap<u32, ()>) -> StyleStore<u32> {
    GraphSeeder::new()
        .node_visitor(|n: &u32| Some(attrs! { "label" => format!("node {}", n), "shape" => "box" }))
        .edge_visitor(|h: &u32, t: &u32| Some(attrs! { "weight" => t - h }))
        .build(graph, "bench", GraphKind::Directed)
        .expect("Failed to seed store")
}

/// Benchmark seeding stores of increasing size.
fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    for size in [100u32, 1_000, 10_000] {
        let graph = layered_graph(size, 3);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(styled_store(graph)));
        });
    }

    group.finish();
}

/// Benchmark producing the DOT text.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [100u32, 1_000, 10_000] {
        let store = styled_store(&layered_graph(size, 3));
        let bytes = store.to_text().len();
        group.throughput(Throughput::Bytes(bytes as u64));

        group.bench_with_input(BenchmarkId::new("to_text", size), &store, |b, store| {
            b.iter(|| black_box(store.to_text()));
        });

        group.bench_with_input(BenchmarkId::new("write_to", size), &store, |b, store| {
            b.iter(|| {
                let mut sink = Vec::with_capacity(bytes);
                store.write_to(&mut sink).expect("in-memory write cannot fail");
                black_box(sink)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seed, bench_serialize);
criterion_main!(benches);
