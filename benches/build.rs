#![allow(unused)]
extern crate densegraph;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use densegraph::prelude::*;
use std::hint::black_box;

/// Deterministic sparse graph: each node follows a handful of pseudo-random others.
fn synthetic_records(nodes: i32, degree: i32) -> Vec<EdgeRecord> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..nodes)
        .map(|node| {
            let edges = (0..degree)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (state % nodes as u64) as i32
                })
                .collect();
            EdgeRecord::new(node, edges)
        })
        .collect()
}

/// Benchmark bulk construction for each storage mode
fn bench_build(c: &mut Criterion) {
    let records = synthetic_records(50_000, 16);
    let edges: u64 = records.iter().map(|r| r.out_edges.len() as u64).sum();

    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(edges));
    group.sample_size(20);
    for dir in [
        StoredGraphDir::OnlyOut,
        StoredGraphDir::OnlyIn,
        StoredGraphDir::BothInOut,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(dir), &records, |b, records| {
            b.iter(|| {
                let graph = DirectedGraph::from_records(black_box(records), dir).unwrap();
                black_box(graph)
            });
        });
    }
    group.finish();
}

/// Benchmark neighbor queries against a built graph
fn bench_queries(c: &mut Criterion) {
    let records = synthetic_records(50_000, 16);
    let graph = DirectedGraph::from_records(&records, StoredGraphDir::BothInOut).unwrap();

    let mut group = c.benchmark_group("queries");
    group.bench_function("inbound_degree_sum", |b| {
        b.iter(|| {
            let total: usize = black_box(&graph).nodes().map(|n| n.inbound_count()).sum();
            black_box(total)
        });
    });
    group.bench_function("is_outbound_node", |b| {
        let probe = NodeId::new(7);
        b.iter(|| {
            let hits = black_box(&graph)
                .nodes()
                .filter(|n| n.is_outbound_node(probe))
                .count();
            black_box(hits)
        });
    });
    group.finish();
}

/// Benchmark renumbering a string-keyed adjacency map
fn bench_renumber(c: &mut Criterion) {
    let adjacency: Vec<(String, Vec<String>)> = synthetic_records(20_000, 8)
        .into_iter()
        .map(|record| {
            (
                format!("user-{}", record.node_id),
                record
                    .out_edges
                    .iter()
                    .map(|e| format!("user-{e}"))
                    .collect(),
            )
        })
        .collect();

    c.bench_function("renumber_adjacency", |b| {
        b.iter(|| {
            let mut numberer = NodeNumberer::with_capacity(adjacency.len());
            let records = numberer.renumber_adjacency(black_box(adjacency.clone()));
            black_box(records)
        });
    });
}

criterion_group!(benches, bench_build, bench_queries, bench_renumber);
criterion_main!(benches);
