//! 随机连通图上的邮路性质测试

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routegraph::algorithm::{build_tour, OddVertexMatcher, PostmanResult, PostmanSolver};
use routegraph::{EdgeId, Graph, MatchingStrategy, SolverConfig, VertexId};

/// 随机生成树加随机额外边（可能有平行边和自环），整数权重
fn random_connected_graph(rng: &mut StdRng, vertices: usize, extra_edges: usize) -> Graph {
    let mut graph = Graph::new();
    for _ in 0..vertices {
        graph.add_vertex();
    }
    for v in 1..vertices {
        let u = rng.gen_range(0..v);
        let weight = rng.gen_range(1..10) as f64;
        graph.add_edge(VertexId(u), VertexId(v), weight).unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        let weight = rng.gen_range(1..10) as f64;
        graph.add_edge(VertexId(u), VertexId(v), weight).unwrap();
    }
    graph
}

fn assert_valid_route(graph: &Graph, result: &PostmanResult) {
    assert!(result.is_cycle);
    assert_eq!(result.original_edge_bound, graph.edge_bound());
    assert_eq!(
        result.edge_order.len(),
        graph.edge_count() + result.duplicate_edge_ids.len()
    );

    // 每个 ID 恰好出现一次
    let mut seen = vec![0usize; graph.edge_bound() + result.duplicate_edge_ids.len()];
    for &id in &result.edge_order {
        seen[id.0] += 1;
    }
    assert!(seen.iter().all(|&count| count == 1));

    // 复制边指向原始边
    for &original in &result.duplicate_edge_ids {
        assert!(original.0 < graph.edge_bound());
        assert!(graph.edge(original).is_some());
    }

    // 顶点序列首尾相接，每一步都走在对应的原始边上
    assert_eq!(result.vertex_order.len(), result.edge_order.len() + 1);
    assert_eq!(result.vertex_order.first(), result.vertex_order.last());
    for (k, &id) in result.edge_order.iter().enumerate() {
        let edge = graph.edge(result.original_of(id)).unwrap();
        assert!(edge.connects(result.vertex_order[k], result.vertex_order[k + 1]));
    }
}

/// 与独立求出的最小配对比较：额外权重等于配对代价，复制边恰为配对路径上的边
fn assert_matches_pairing(graph: &Graph, config: &SolverConfig, result: &PostmanResult) {
    let odd = graph.odd_vertices();
    if odd.is_empty() {
        assert!(result.duplicate_edge_ids.is_empty());
        assert_eq!(result.total_weight, graph.total_weight());
        return;
    }

    let matching = OddVertexMatcher::with_config(graph, config.clone())
        .match_vertices(&odd)
        .unwrap();
    assert_eq!(matching.pairs.len() * 2, odd.len());
    assert_eq!(result.total_weight, graph.total_weight() + matching.total_cost);

    let mut expected: Vec<EdgeId> = matching
        .pairs
        .iter()
        .flat_map(|pair| pair.path.edges.iter().copied())
        .collect();
    let mut actual = result.duplicate_edge_ids.clone();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_random_graphs_produce_valid_routes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let solver = PostmanSolver::new();

    for _ in 0..200 {
        let vertices = rng.gen_range(2..16);
        let extra = rng.gen_range(0..vertices * 2);
        let graph = random_connected_graph(&mut rng, vertices, extra);

        let result = solver.try_solve(&graph).unwrap();
        assert_valid_route(&graph, &result);
        assert_matches_pairing(&graph, solver.config(), &result);
    }
}

#[test]
fn test_matching_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let exhaustive = PostmanSolver::with_config(
        SolverConfig::default().with_matching(MatchingStrategy::Exhaustive),
    );
    let bitmask = PostmanSolver::with_config(
        SolverConfig::default().with_matching(MatchingStrategy::Bitmask),
    );

    // 最多 9 个顶点，奇度数顶点不超过 8 个
    for _ in 0..100 {
        let vertices = rng.gen_range(2..10);
        let extra = rng.gen_range(0..vertices);
        let graph = random_connected_graph(&mut rng, vertices, extra);

        let a = exhaustive.try_solve(&graph).unwrap();
        let b = bitmask.try_solve(&graph).unwrap();
        assert_eq!(a.total_weight, b.total_weight);
        assert_valid_route(&graph, &a);
        assert_valid_route(&graph, &b);
        assert_matches_pairing(&graph, exhaustive.config(), &a);
        assert_matches_pairing(&graph, bitmask.config(), &b);
    }
}

#[test]
fn test_eulerian_graphs_need_no_duplicates() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        // 随机闭合游走上的边，每个顶点度数为偶数
        let vertices = rng.gen_range(2..12);
        let mut graph = Graph::new();
        for _ in 0..vertices {
            graph.add_vertex();
        }
        let mut current = 0;
        for _ in 0..rng.gen_range(1..30) {
            let next = rng.gen_range(0..vertices);
            graph
                .add_edge(VertexId(current), VertexId(next), rng.gen_range(1..5) as f64)
                .unwrap();
            current = next;
        }
        graph.add_edge(VertexId(current), VertexId(0), 1.0).unwrap();

        assert!(graph.odd_vertices().is_empty());
        let tour = build_tour(&graph).unwrap();
        assert!(tour.is_cycle);
        assert_eq!(tour.edge_order.len(), graph.edge_count());

        let result = PostmanSolver::new().try_solve(&graph).unwrap();
        assert!(result.duplicate_edge_ids.is_empty());
        assert_eq!(result.total_weight, graph.total_weight());
    }
}
