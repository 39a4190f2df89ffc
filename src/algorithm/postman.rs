//! 中国邮路问题
//!
//! 度数分析 → 奇度数顶点配对 → 沿最短路径增广 → 在增广图上求欧拉回路。
//! 增广在原图的副本上进行，调用方的图不会被修改。

use crate::algorithm::augment::augment;
use crate::algorithm::euler::{build_tour, try_build_tour, EulerResult};
use crate::algorithm::matching::OddVertexMatcher;
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// 邮路结果
///
/// `duplicate_edge_ids[k]` 为第 k 条复制边对应的原始边，
/// 该复制边在 `edge_order` 中的 ID 为 `original_edge_bound + k`。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostmanResult {
    /// 边的遍历顺序（可能包含复制边 ID）
    pub edge_order: Vec<EdgeId>,
    /// 被复制的原始边，每次复制一项
    pub duplicate_edge_ids: Vec<EdgeId>,
    /// true 为回路
    pub is_cycle: bool,
    /// 由边序列推导出的顶点序列
    pub vertex_order: Vec<VertexId>,
    /// 原图的边槽位数量
    pub original_edge_bound: usize,
    /// 路线总权重（复制边重复计入）
    pub total_weight: f64,
}

impl PostmanResult {
    /// 无解时的空结果
    pub fn infeasible() -> Self {
        Self::default()
    }

    /// 不含复制边的欧拉路线
    pub fn from_tour(graph: &Graph, tour: EulerResult) -> Self {
        Self {
            vertex_order: graph.walk_vertices(&tour.edge_order),
            total_weight: route_weight(graph, &tour.edge_order),
            edge_order: tour.edge_order,
            duplicate_edge_ids: Vec::new(),
            is_cycle: tour.is_cycle,
            original_edge_bound: graph.edge_bound(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edge_order.is_empty()
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

/// 中国邮路求解器
#[derive(Debug, Clone, Default)]
pub struct PostmanSolver {
    config: SolverConfig,
}

impl PostmanSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 求解，无解时返回空结果
    pub fn solve(&self, graph: &Graph) -> PostmanResult {
        match self.try_solve(graph) {
            Ok(result) => result,
            Err(e) => {
                info!(error = %e, "postman route not found");
                PostmanResult::infeasible()
            }
        }
    }

    /// 求解，失败时给出原因
    ///
    /// 无边的图返回平凡回路。
    pub fn try_solve(&self, graph: &Graph) -> Result<PostmanResult> {
        let original_edge_bound = graph.edge_bound();
        if graph.edge_count() == 0 {
            return Ok(PostmanResult {
                is_cycle: true,
                original_edge_bound,
                ..PostmanResult::default()
            });
        }
        if !graph.is_connected() {
            return Err(Error::NotConnected);
        }

        let odd = graph.odd_vertices();
        if odd.is_empty() {
            debug!("all degrees even, touring original graph");
            return Ok(PostmanResult::from_tour(graph, try_build_tour(graph)?));
        }

        debug!(odd = odd.len(), "pairing odd vertices");
        let matching =
            OddVertexMatcher::with_config(graph, self.config.clone()).match_vertices(&odd)?;
        let augmented = augment(graph, &matching.pairs)?;
        let tour = try_build_tour(augmented.graph())?;

        let result = PostmanResult {
            vertex_order: augmented.graph().walk_vertices(&tour.edge_order),
            total_weight: route_weight(augmented.graph(), &tour.edge_order),
            edge_order: tour.edge_order,
            duplicate_edge_ids: augmented.duplicate_edge_ids().to_vec(),
            is_cycle: tour.is_cycle,
            original_edge_bound,
        };

        info!(
            edges = graph.edge_count(),
            duplicates = result.duplicate_edge_ids.len(),
            extra_weight = matching.total_cost,
            total_weight = result.total_weight,
            "postman route solved"
        );
        Ok(result)
    }
}

fn route_weight(graph: &Graph, edge_order: &[EdgeId]) -> f64 {
    edge_order
        .iter()
        .filter_map(|&id| graph.edge(id))
        .map(|e| e.weight())
        .sum()
}

/// 使用默认配置求解
pub fn solve(graph: &Graph) -> PostmanResult {
    PostmanSolver::new().solve(graph)
}

/// 路线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// 每条边恰好经过一次
    Euler,
    /// 部分边需要重复经过
    Postman,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Euler => write!(f, "Euler"),
            RouteKind::Postman => write!(f, "Chinese Postman"),
        }
    }
}

/// 自动路线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub kind: RouteKind,
    #[serde(flatten)]
    pub result: PostmanResult,
}

impl Route {
    /// 只求欧拉路线
    pub fn euler(graph: &Graph) -> Result<Self> {
        let tour = try_build_tour(graph)?;
        Ok(Self {
            kind: RouteKind::Euler,
            result: PostmanResult::from_tour(graph, tour),
        })
    }

    /// 只求中国邮路
    pub fn postman(graph: &Graph, config: &SolverConfig) -> Result<Self> {
        let result = PostmanSolver::with_config(config.clone()).try_solve(graph)?;
        Ok(Self {
            kind: RouteKind::Postman,
            result,
        })
    }
}

/// 先尝试欧拉路径，不存在时退回中国邮路；都不存在时返回 None
pub fn auto_route(graph: &Graph, config: &SolverConfig) -> Option<Route> {
    if let Some(tour) = build_tour(graph) {
        return Some(Route {
            kind: RouteKind::Euler,
            result: PostmanResult::from_tour(graph, tour),
        });
    }

    let result = PostmanSolver::with_config(config.clone()).solve(graph);
    (!result.is_empty()).then_some(Route {
        kind: RouteKind::Postman,
        result,
    })
}
