//! 顶点定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（从 0 开始，删除后不会复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 显示名称
    label: String,
}

impl Vertex {
    /// 创建新顶点，使用默认名称
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            label: default_label(id),
        }
    }

    /// 创建带名称的顶点
    pub fn with_label(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取显示名称
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 设置显示名称
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

/// 由 ID 生成默认名称: A..Z, AA..AZ, BA..
pub fn default_label(id: VertexId) -> String {
    let mut n = id.0;
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}
