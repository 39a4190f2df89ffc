//! 邻接索引
//!
//! 顶点到关联边 ID 的映射。以边 ID 而非邻居顶点建索引，
//! 使平行边在遍历中可以区分。

use crate::graph::edge::EdgeId;
use crate::graph::vertex::VertexId;
use smallvec::SmallVec;

/// 单个顶点的关联边列表，多数顶点度数很小
pub type IncidentEdges = SmallVec<[EdgeId; 4]>;

/// 邻接索引（按顶点槽位存储）
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    incident: Vec<IncidentEdges>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            incident: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            incident: Vec::with_capacity(vertex_count),
        }
    }

    /// 为新顶点分配槽位
    pub fn add_vertex(&mut self) {
        self.incident.push(IncidentEdges::new());
    }

    /// 添加边；自环在其顶点列表中出现两次
    pub fn add_edge(&mut self, edge_id: EdgeId, u: VertexId, v: VertexId) {
        self.incident[u.0].push(edge_id);
        self.incident[v.0].push(edge_id);
    }

    /// 移除边
    pub fn remove_edge(&mut self, edge_id: EdgeId, u: VertexId, v: VertexId) {
        for vertex in [u, v] {
            if let Some(list) = self.incident.get_mut(vertex.0) {
                list.retain(|id| *id != edge_id);
            }
        }
    }

    /// 获取顶点的关联边
    pub fn incident(&self, vertex: VertexId) -> &[EdgeId] {
        self.incident
            .get(vertex.0)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 获取顶点度数（自环计两次）
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident(vertex).len()
    }

    /// 顶点槽位数量
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    /// 遍历 (顶点, 关联边) 对
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[EdgeId])> {
        self.incident
            .iter()
            .enumerate()
            .map(|(i, list)| (VertexId(i), list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_basic() {
        let mut index = AdjacencyIndex::new();
        for _ in 0..3 {
            index.add_vertex();
        }

        index.add_edge(EdgeId(0), VertexId(0), VertexId(1));
        index.add_edge(EdgeId(1), VertexId(1), VertexId(2));

        assert_eq!(index.incident(VertexId(1)), &[EdgeId(0), EdgeId(1)]);
        assert_eq!(index.degree(VertexId(0)), 1);
        assert_eq!(index.degree(VertexId(9)), 0);

        index.remove_edge(EdgeId(0), VertexId(0), VertexId(1));
        assert_eq!(index.incident(VertexId(1)), &[EdgeId(1)]);
        assert_eq!(index.degree(VertexId(0)), 0);
    }

    #[test]
    fn test_adjacency_self_loop_and_parallel() {
        let mut index = AdjacencyIndex::new();
        index.add_vertex();
        index.add_vertex();

        index.add_edge(EdgeId(0), VertexId(0), VertexId(0));
        index.add_edge(EdgeId(1), VertexId(0), VertexId(1));
        index.add_edge(EdgeId(2), VertexId(0), VertexId(1));

        assert_eq!(index.degree(VertexId(0)), 4);
        assert_eq!(index.incident(VertexId(1)), &[EdgeId(1), EdgeId(2)]);

        index.remove_edge(EdgeId(0), VertexId(0), VertexId(0));
        assert_eq!(index.degree(VertexId(0)), 2);
    }
}
