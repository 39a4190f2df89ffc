//! RouteGraph - 欧拉路线与中国邮路求解库
//!
//! 在带权无向图上：
//! - 判断欧拉路径 / 欧拉回路并用 Hierholzer 算法构造
//! - 以 Dijkstra 计算最短路径
//! - 对奇度数顶点做最小权完美匹配，复制边后求中国邮路
//! - 从 JSON / CSV 读取图并输出路线摘要

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    auto_route, build_euler_tour, shortest_path_vertices, solve_chinese_postman, EulerResult,
    PostmanResult, PostmanSolver, Route, RouteKind,
};
pub use config::{MatchingStrategy, SolverConfig};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use report::RouteSummary;
pub use types::Cost;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
