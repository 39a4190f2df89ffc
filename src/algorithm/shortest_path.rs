//! 最短路径算法
//!
//! 基于优先队列的单源 Dijkstra。要求边权非负，
//! `Graph::add_edge` 已在写入时拒绝负权和非有限权重。

use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::Cost;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列（比顶点少一个）
    pub edges: Vec<EdgeId>,
    /// 路径总权重
    pub total_weight: f64,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// 路径边数
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// 单源最短路径树：到各顶点的距离和前驱
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    dist: Vec<Cost>,
    /// 前驱顶点及经过的边（按边记录，平行边不会混淆）
    pred: Vec<Option<(VertexId, EdgeId)>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 到顶点的代价，不可达为 `Cost::INFINITY`
    pub fn cost(&self, vertex: VertexId) -> Cost {
        self.dist.get(vertex.0).copied().unwrap_or(Cost::INFINITY)
    }

    /// 到顶点的最短距离，不可达返回 None
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        let cost = self.cost(vertex);
        cost.is_finite().then_some(cost.value())
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.cost(vertex).is_finite()
    }

    /// 前驱顶点及对应的边
    pub fn predecessor(&self, vertex: VertexId) -> Option<(VertexId, EdgeId)> {
        self.pred.get(vertex.0).copied().flatten()
    }

    /// 重构到目标顶点的路径
    pub fn path_to(&self, target: VertexId) -> Option<PathResult> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;

        while current != self.source {
            let (prev, edge_id) = self.predecessor(current)?;
            edges.push(edge_id);
            vertices.push(prev);
            current = prev;
        }

        vertices.reverse();
        edges.reverse();

        Some(PathResult {
            vertices,
            edges,
            total_weight: self.cost(target).value(),
        })
    }

    /// 到目标顶点的顶点序列，不可达时为空
    pub fn vertices_to(&self, target: VertexId) -> Vec<VertexId> {
        self.path_to(target)
            .map(|path| path.vertices)
            .unwrap_or_default()
    }
}

/// 计算从 source 出发到所有顶点的最短路径
pub fn dijkstra(graph: &Graph, source: VertexId) -> ShortestPathTree {
    run_dijkstra(graph, source, None)
}

/// 计算 source 到 target 的最短路径顶点序列
///
/// source == target 时返回 `[source]`，不可达时返回空序列。
pub fn shortest_path(graph: &Graph, source: VertexId, target: VertexId) -> Vec<VertexId> {
    if source == target {
        return if graph.contains_vertex(source) {
            vec![source]
        } else {
            Vec::new()
        };
    }
    run_dijkstra(graph, source, Some(target)).vertices_to(target)
}

fn run_dijkstra(graph: &Graph, source: VertexId, target: Option<VertexId>) -> ShortestPathTree {
    let bound = graph.vertex_bound();
    let mut tree = ShortestPathTree {
        source,
        dist: vec![Cost::INFINITY; bound],
        pred: vec![None; bound],
    };

    if !graph.contains_vertex(source) {
        return tree;
    }

    let mut settled = vec![false; bound];
    // 优先级带上顶点 ID，代价相同时先弹出 ID 小的顶点
    let mut queue: PriorityQueue<VertexId, Reverse<(Cost, VertexId)>> = PriorityQueue::new();
    tree.dist[source.0] = Cost::ZERO;
    queue.push(source, Reverse((Cost::ZERO, source)));

    while let Some((u, Reverse((du, _)))) = queue.pop() {
        // 队列按顶点键控，push_increase 原地更新优先级；已确定的顶点不会再入队
        settled[u.0] = true;

        if target == Some(u) {
            break;
        }

        for &edge_id in graph.incident_edges(u) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let Some(v) = edge.other(u) else {
                continue;
            };
            if settled[v.0] {
                continue;
            }

            let candidate = du + Cost(edge.weight());
            if candidate < tree.dist[v.0] {
                tree.dist[v.0] = candidate;
                tree.pred[v.0] = Some((u, edge_id));
                queue.push_increase(v, Reverse((candidate, v)));
            }
        }
    }

    trace!(
        source = %source,
        settled = settled.iter().filter(|&&s| s).count(),
        "dijkstra finished"
    );
    tree
}

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Dijkstra 最短路径（包含边序列和总权重）
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Option<PathResult> {
        if !self.graph.contains_vertex(start) || !self.graph.contains_vertex(end) {
            return None;
        }
        if start == end {
            return Some(PathResult::with_start(start));
        }
        run_dijkstra(self.graph, start, Some(end)).path_to(end)
    }

    /// 单源最短路径树
    pub fn distances_from(&self, source: VertexId) -> ShortestPathTree {
        dijkstra(self.graph, source)
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        self.shortest_path(start, end).is_some()
    }
}
