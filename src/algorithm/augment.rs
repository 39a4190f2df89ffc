//! 图增广
//!
//! 沿每组配对的最短路径复制边，使所有顶点度数变为偶数。
//! 复制边追加在原始边之后，ID 从原图的 `edge_bound()` 开始连续编号。

use crate::algorithm::matching::MatchedPair;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use tracing::{debug, warn};

/// 增广图
#[derive(Debug, Clone)]
pub struct AugmentedGraph {
    graph: Graph,
    /// 原图的边槽位数量，复制边 ID = original_edge_bound + k
    original_edge_bound: usize,
    /// 第 k 条复制边对应的原始边 ID
    duplicate_edge_ids: Vec<EdgeId>,
}

impl AugmentedGraph {
    /// 获取增广后的图
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn original_edge_bound(&self) -> usize {
        self.original_edge_bound
    }

    /// 复制边对应的原始边 ID（每次复制一项）
    pub fn duplicate_edge_ids(&self) -> &[EdgeId] {
        &self.duplicate_edge_ids
    }

    /// 是否为复制边
    pub fn is_duplicate(&self, id: EdgeId) -> bool {
        id.0 >= self.original_edge_bound
            && id.0 - self.original_edge_bound < self.duplicate_edge_ids.len()
    }

    /// 复制边对应的原始边；原始边返回自身
    pub fn original_of(&self, id: EdgeId) -> EdgeId {
        if self.is_duplicate(id) {
            self.duplicate_edge_ids[id.0 - self.original_edge_bound]
        } else {
            id
        }
    }
}

/// 沿配对的最短路径增广
///
/// 优先使用 Dijkstra 记录的边；找不到对应边时整体失败，不返回部分增广结果。
pub fn augment(graph: &Graph, pairs: &[MatchedPair]) -> Result<AugmentedGraph> {
    let mut route_edges = Vec::new();
    for pair in pairs {
        route_edges.extend(resolve_path_edges(
            graph,
            &pair.path.vertices,
            &pair.path.edges,
        )?);
    }
    build(graph, route_edges)
}

/// 沿顶点序列增广；相邻顶点之间取权重最小的边
pub fn augment_along_vertex_paths(graph: &Graph, paths: &[Vec<VertexId>]) -> Result<AugmentedGraph> {
    let mut route_edges = Vec::new();
    for path in paths {
        route_edges.extend(resolve_path_edges(graph, path, &[])?);
    }
    build(graph, route_edges)
}

/// 找出顶点序列上每一步对应的原图边
fn resolve_path_edges(
    graph: &Graph,
    vertices: &[VertexId],
    recorded: &[EdgeId],
) -> Result<Vec<EdgeId>> {
    let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));

    for (k, step) in vertices.windows(2).enumerate() {
        let (from, to) = (step[0], step[1]);
        let recorded_edge = recorded
            .get(k)
            .copied()
            .filter(|&id| graph.edge(id).is_some_and(|e| e.connects(from, to)));

        match recorded_edge.or_else(|| graph.cheapest_edge_between(from, to)) {
            Some(id) => edges.push(id),
            None => {
                warn!(from = %from, to = %to, "no edge between consecutive path vertices");
                return Err(Error::MissingPathEdge { from, to });
            }
        }
    }
    Ok(edges)
}

fn build(graph: &Graph, route_edges: Vec<EdgeId>) -> Result<AugmentedGraph> {
    let original_edge_bound = graph.edge_bound();
    let mut augmented = graph.clone();
    let mut duplicate_edge_ids = Vec::with_capacity(route_edges.len());

    for original in route_edges {
        augmented.add_duplicate_edge(original)?;
        duplicate_edge_ids.push(original);
    }

    let residual = augmented.odd_vertices().len();
    if residual > 0 {
        warn!(residual, "augmented graph still has odd vertices");
        return Err(Error::ResidualOddVertices(residual));
    }

    debug!(
        duplicates = duplicate_edge_ids.len(),
        edges = augmented.edge_count(),
        "graph augmented"
    );

    Ok(AugmentedGraph {
        graph: augmented,
        original_edge_bound,
        duplicate_edge_ids,
    })
}
