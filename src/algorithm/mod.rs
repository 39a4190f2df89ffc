//! 图算法模块
//!
//! 包含最短路径、欧拉路径和中国邮路算法

pub mod augment;
pub mod euler;
pub mod matching;
pub mod postman;
pub mod shortest_path;

pub use augment::{augment, augment_along_vertex_paths, AugmentedGraph};
pub use euler::{build_tour, try_build_tour, EulerResult};
pub use matching::{CostMatrix, MatchedPair, Matching, OddVertexMatcher};
pub use postman::{auto_route, solve, PostmanResult, PostmanSolver, Route, RouteKind};
pub use shortest_path::{dijkstra, shortest_path, PathFinder, PathResult, ShortestPathTree};

use crate::graph::{Graph, VertexId};

/// 构造欧拉路径或回路
pub fn build_euler_tour(graph: &Graph) -> Option<EulerResult> {
    build_tour(graph)
}

/// 最短路径顶点序列，不可达时为空
pub fn shortest_path_vertices(graph: &Graph, source: VertexId, target: VertexId) -> Vec<VertexId> {
    shortest_path(graph, source, target)
}

/// 求解中国邮路，无解时返回空结果
pub fn solve_chinese_postman(graph: &Graph) -> PostmanResult {
    solve(graph)
}
