//! 欧拉路线与中国邮路基准测试

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use routegraph::algorithm::{build_tour, dijkstra, solve};
use routegraph::graph::{Graph, VertexId};
use std::hint::black_box;

/// rows × cols 网格，边权随位置变化
fn grid(rows: usize, cols: usize) -> Graph {
    let mut graph = Graph::with_capacity(rows * cols, 2 * rows * cols);
    for _ in 0..rows * cols {
        graph.add_vertex();
    }
    let at = |r: usize, c: usize| VertexId(r * cols + c);
    for r in 0..rows {
        for c in 0..cols {
            let weight = 1.0 + ((r * 7 + c * 3) % 5) as f64;
            if c + 1 < cols {
                let _ = graph.add_edge(at(r, c), at(r, c + 1), weight);
            }
            if r + 1 < rows {
                let _ = graph.add_edge(at(r, c), at(r + 1, c), weight + 0.5);
            }
        }
    }
    graph
}

/// n 个顶点的环，每个顶点额外连一条弦，度数全为偶数
fn doubled_cycle(n: usize) -> Graph {
    let mut graph = Graph::with_capacity(n, 2 * n);
    for _ in 0..n {
        graph.add_vertex();
    }
    for i in 0..n {
        let _ = graph.add_edge(VertexId(i), VertexId((i + 1) % n), 1.0);
        let _ = graph.add_edge(VertexId(i), VertexId((i + 2) % n), 2.0);
    }
    graph
}

fn bench_euler_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_tour");
    for &n in &[1_000usize, 50_000] {
        let graph = doubled_cycle(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(build_tour(black_box(graph)).map(|t| t.edge_order.len())))
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = grid(100, 100);
    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| black_box(dijkstra(black_box(&graph), VertexId(0)).distance(VertexId(9_999))))
    });
}

fn bench_postman(c: &mut Criterion) {
    let mut group = c.benchmark_group("postman_grid");
    // 网格边界上的非角顶点为奇度数：2 * (rows - 2) + 2 * (cols - 2)
    for &(rows, cols) in &[(3usize, 4usize), (4, 5), (5, 6)] {
        let graph = grid(rows, cols);
        let id = format!("{}x{}", rows, cols);
        group.bench_with_input(BenchmarkId::from_parameter(id), &graph, |b, graph| {
            b.iter(|| black_box(solve(black_box(graph)).total_weight))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_euler_tour, bench_dijkstra, bench_postman);
criterion_main!(benches);
