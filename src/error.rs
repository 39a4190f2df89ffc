//! 错误类型定义

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0}")]
    EdgeNotFound(EdgeId),

    #[error("无效的边权重: {0}（必须为有限的非负数）")]
    InvalidWeight(f64),

    #[error("图在正度数顶点上不连通")]
    NotConnected,

    #[error("奇度数顶点数量为 {0}，不存在欧拉路径")]
    OddVertexCount(usize),

    #[error("欧拉路径校验失败: 边 {0} 未被恰好使用一次")]
    TourVerification(EdgeId),

    #[error("奇度数顶点数量为奇数: {0}")]
    OddVertexParity(usize),

    #[error("奇度数顶点过多: {count} 个，当前匹配策略上限为 {limit}")]
    MatchingTooLarge { count: usize, limit: usize },

    #[error("奇度数顶点之间不可达，无法完成配对")]
    Disconnected,

    #[error("增广失败: 顶点 {from} 与 {to} 之间找不到边")]
    MissingPathEdge { from: VertexId, to: VertexId },

    #[error("增广后仍有 {0} 个奇度数顶点")]
    ResidualOddVertices(usize),

    #[error("导入错误: {0}")]
    Import(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV 解析错误: {0}")]
    Csv(#[from] csv::Error),
}
