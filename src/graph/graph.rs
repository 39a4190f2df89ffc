//! 图数据结构
//!
//! 顶点和边按槽位存储。删除只留下空槽（墓碑），ID 永不复用，
//! 因此删除之前得到的 ID 不会悄悄指向别的元素。

use super::edge::{Edge, EdgeId};
use super::index::AdjacencyIndex;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};

/// 无向带权图（支持平行边和自环）
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点槽位
    vertices: Vec<Option<Vertex>>,
    /// 边槽位
    edges: Vec<Option<Edge>>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
    /// 存活顶点数
    live_vertices: usize,
    /// 存活边数
    live_edges: usize,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            adjacency: AdjacencyIndex::with_capacity(vertex_count),
            live_vertices: 0,
            live_edges: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（默认名称 A, B, C...）
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.push_vertex(Vertex::new(id))
    }

    /// 添加带名称的顶点
    pub fn add_vertex_with_label(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.push_vertex(Vertex::with_label(id, label))
    }

    fn push_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = vertex.id();
        self.vertices.push(Some(vertex));
        self.adjacency.add_vertex();
        self.live_vertices += 1;
        id
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// 获取顶点名称，不存在时返回 ID 字符串
    pub fn label(&self, id: VertexId) -> String {
        self.vertex(id)
            .map(|v| v.label().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    /// 修改顶点名称
    pub fn set_vertex_label(&mut self, id: VertexId, label: impl Into<String>) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .ok_or(Error::VertexNotFound(id))?;
        vertex.set_label(label);
        Ok(())
    }

    /// 删除顶点及其所有关联边
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        if !self.contains_vertex(id) {
            return Err(Error::VertexNotFound(id));
        }

        let incident: Vec<EdgeId> = self.adjacency.incident(id).to_vec();
        for edge_id in incident {
            // 自环在列表中出现两次，第二次已被删除
            if self.edge(edge_id).is_some() {
                self.remove_edge(edge_id)?;
            }
        }

        let vertex = self.vertices[id.0]
            .take()
            .ok_or(Error::VertexNotFound(id))?;
        self.live_vertices -= 1;
        Ok(vertex)
    }

    /// 遍历存活顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter_map(|slot| slot.as_ref())
    }

    /// 遍历存活顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().map(|v| v.id())
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// 顶点槽位数量（已分配过的最大 ID + 1）
    pub fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<EdgeId> {
        if !self.contains_vertex(u) {
            return Err(Error::VertexNotFound(u));
        }
        if !self.contains_vertex(v) {
            return Err(Error::VertexNotFound(v));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        let id = EdgeId::new(self.edges.len());
        Ok(self.push_edge(Edge::new(id, u, v, weight)))
    }

    /// 追加一条与原始边相同的复制边，返回新边 ID
    pub fn add_duplicate_edge(&mut self, original: EdgeId) -> Result<EdgeId> {
        let source = self.edge(original).ok_or(Error::EdgeNotFound(original))?;
        let id = EdgeId::new(self.edges.len());
        let duplicate = Edge::duplicate(id, source);
        Ok(self.push_edge(duplicate))
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = edge.id();
        self.adjacency.add_edge(id, edge.u(), edge.v());
        self.edges.push(Some(edge));
        self.live_edges += 1;
        id
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// 删除边
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .get_mut(id.0)
            .and_then(|slot| slot.take())
            .ok_or(Error::EdgeNotFound(id))?;
        self.adjacency.remove_edge(id, edge.u(), edge.v());
        self.live_edges -= 1;
        Ok(edge)
    }

    /// 遍历存活边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter_map(|slot| slot.as_ref())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// 边槽位数量；增广图中复制边的 ID 从这里开始编号
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    /// 获取两点之间的所有边（不区分方向）
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> Vec<EdgeId> {
        self.adjacency
            .incident(a)
            .iter()
            .copied()
            .filter(|&id| self.edge(id).is_some_and(|e| e.connects(a, b)))
            .fold(Vec::new(), |mut acc, id| {
                // 自环在 a 的列表中出现两次
                if acc.last() != Some(&id) {
                    acc.push(id);
                }
                acc
            })
    }

    /// 两点之间权重最小的边，权重相同时取 ID 较小者
    pub fn cheapest_edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edges_between(a, b)
            .into_iter()
            .filter_map(|id| self.edge(id))
            .min_by(|x, y| x.weight().total_cmp(&y.weight()).then(x.id().cmp(&y.id())))
            .map(|e| e.id())
    }

    /// 所有存活边的权重之和
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|e| e.weight()).sum()
    }

    // ==================== 邻居与度数 ====================

    /// 获取邻接索引
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// 获取顶点的关联边
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.adjacency.incident(vertex)
    }

    /// 获取顶点的邻居（每条关联边一项，平行边会重复出现）
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.adjacency
            .incident(vertex)
            .iter()
            .filter_map(|&id| self.edge(id))
            .filter_map(|e| e.other(vertex))
            .collect()
    }

    /// 获取顶点度数（自环计两次）
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.degree(vertex)
    }

    /// 所有顶点槽位的度数，已删除的槽位为 0
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.vertex_bound())
            .map(|i| self.degree(VertexId(i)))
            .collect()
    }

    /// 奇度数顶点（按 ID 升序）
    pub fn odd_vertices(&self) -> Vec<VertexId> {
        self.vertex_ids()
            .filter(|&v| self.degree(v) % 2 == 1)
            .collect()
    }

    /// 在正度数顶点上是否连通；孤立顶点不影响结果
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertex_ids().find(|&v| self.degree(v) > 0) else {
            return true;
        };

        let mut visited = vec![false; self.vertex_bound()];
        let mut stack = vec![start];
        visited[start.0] = true;

        while let Some(current) = stack.pop() {
            for &edge_id in self.incident_edges(current) {
                let Some(next) = self.edge(edge_id).and_then(|e| e.other(current)) else {
                    continue;
                };
                if !visited[next.0] {
                    visited[next.0] = true;
                    stack.push(next);
                }
            }
        }

        self.vertex_ids()
            .all(|v| visited[v.0] || self.degree(v) == 0)
    }

    // ==================== 路径 ====================

    /// 由边序列推导顶点序列
    ///
    /// 依次尝试第一条边的两个端点作为起点，返回与整条边序列一致的走法；
    /// 都不一致时返回空序列。
    pub fn walk_vertices(&self, edge_order: &[EdgeId]) -> Vec<VertexId> {
        let Some(first) = edge_order.first().and_then(|&id| self.edge(id)) else {
            return Vec::new();
        };

        for start in [first.u(), first.v()] {
            if let Some(walk) = self.try_walk(start, edge_order) {
                return walk;
            }
        }
        Vec::new()
    }

    fn try_walk(&self, start: VertexId, edge_order: &[EdgeId]) -> Option<Vec<VertexId>> {
        let mut walk = Vec::with_capacity(edge_order.len() + 1);
        let mut current = start;
        walk.push(current);

        for &id in edge_order {
            current = self.edge(id)?.other(current)?;
            walk.push(current);
        }
        Some(walk)
    }
}
