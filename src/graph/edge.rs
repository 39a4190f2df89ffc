//! 边定义
//!
//! 所有边均按无向边处理，自环在度数中计两次

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（从 0 开始，删除后不会复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 端点 u
    u: VertexId,
    /// 端点 v
    v: VertexId,
    /// 权重（非负）
    weight: f64,
    /// 增广图中的复制边指向原始边
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duplicate_of: Option<EdgeId>,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, u: VertexId, v: VertexId, weight: f64) -> Self {
        Self {
            id,
            u,
            v,
            weight,
            duplicate_of: None,
        }
    }

    /// 创建原始边的副本（用于增广图）
    pub fn duplicate(id: EdgeId, original: &Edge) -> Self {
        Self {
            id,
            u: original.u,
            v: original.v,
            weight: original.weight,
            duplicate_of: Some(original.original_id()),
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn u(&self) -> VertexId {
        self.u
    }

    pub fn v(&self) -> VertexId {
        self.v
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 复制边所指向的原始边
    pub fn duplicate_of(&self) -> Option<EdgeId> {
        self.duplicate_of
    }

    /// 原始边 ID：复制边返回其来源，普通边返回自身
    pub fn original_id(&self) -> EdgeId {
        self.duplicate_of.unwrap_or(self.id)
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate_of.is_some()
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// 是否以该顶点为端点
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.u == vertex || self.v == vertex
    }

    /// 获取另一端顶点；顶点不在边上时返回 None
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }

    /// 是否连接给定的两个顶点（不区分方向）
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_other() {
        let e = Edge::new(EdgeId::new(0), VertexId::new(1), VertexId::new(2), 3.5);

        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(e.other(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(3)), None);
        assert!(e.connects(VertexId::new(2), VertexId::new(1)));
        assert!(!e.is_self_loop());
    }

    #[test]
    fn test_self_loop() {
        let e = Edge::new(EdgeId::new(4), VertexId::new(1), VertexId::new(1), 1.0);

        assert!(e.is_self_loop());
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(1)));
    }

    #[test]
    fn test_edge_duplicate() {
        let original = Edge::new(EdgeId::new(2), VertexId::new(0), VertexId::new(3), 2.0);
        let dup = Edge::duplicate(EdgeId::new(9), &original);

        assert_eq!(dup.id(), EdgeId::new(9));
        assert_eq!(dup.duplicate_of(), Some(EdgeId::new(2)));
        assert_eq!(dup.endpoints(), original.endpoints());
        assert_eq!(dup.weight(), 2.0);

        // 副本的副本仍指向最初的原始边
        let dup2 = Edge::duplicate(EdgeId::new(10), &dup);
        assert_eq!(dup2.duplicate_of(), Some(EdgeId::new(2)));
        assert_eq!(original.original_id(), EdgeId::new(2));
    }
}
