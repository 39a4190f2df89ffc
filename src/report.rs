//! 路线摘要
//!
//! 汇总度数、欧拉性判断、路线步骤和被复制的边，供命令行输出或序列化。

use crate::algorithm::{auto_route, Route, RouteKind};
use crate::config::SolverConfig;
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};

/// 欧拉性判断
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EulerClass {
    /// 所有顶点度数为偶数
    Circuit,
    /// 恰有两个奇度数顶点
    Path { start: VertexId, end: VertexId },
    /// 奇度数顶点多于两个
    NotEulerian { odd_count: usize },
    /// 正度数顶点不连通
    Disconnected,
}

impl EulerClass {
    pub fn classify(graph: &Graph) -> Self {
        if !graph.is_connected() {
            return EulerClass::Disconnected;
        }
        match graph.odd_vertices().as_slice() {
            [] => EulerClass::Circuit,
            [start, end] => EulerClass::Path {
                start: *start,
                end: *end,
            },
            odd => EulerClass::NotEulerian {
                odd_count: odd.len(),
            },
        }
    }
}

/// 边描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLine {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeLine {
    fn new(graph: &Graph, id: EdgeId) -> Option<Self> {
        let edge = graph.edge(id)?;
        Some(Self {
            id,
            from: graph.label(edge.u()),
            to: graph.label(edge.v()),
            weight: edge.weight(),
        })
    }
}

/// 顶点度数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeLine {
    pub vertex: VertexId,
    pub label: String,
    pub degree: usize,
}

/// 路线中的一步
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// 路线中使用的边 ID（复制边为增广图中的 ID）
    pub edge: EdgeId,
    /// 对应的原始边
    pub original: EdgeId,
    pub duplicate: bool,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// 路线摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub edges: Vec<EdgeLine>,
    pub degrees: Vec<DegreeLine>,
    pub analysis: EulerClass,
    pub kind: Option<RouteKind>,
    pub is_cycle: bool,
    pub steps: Vec<RouteStep>,
    pub duplicated_edges: Vec<EdgeLine>,
    pub total_weight: f64,
}

impl RouteSummary {
    /// 自动选择欧拉路线或中国邮路并生成摘要
    pub fn build(graph: &Graph, config: &SolverConfig) -> Self {
        Self::from_route(graph, auto_route(graph, config).as_ref())
    }

    /// 由已有路线生成摘要；route 为 None 表示无解
    pub fn from_route(graph: &Graph, route: Option<&Route>) -> Self {
        let edges = graph
            .edges()
            .filter_map(|e| EdgeLine::new(graph, e.id()))
            .collect();
        let degrees = graph
            .vertices()
            .map(|v| DegreeLine {
                vertex: v.id(),
                label: v.label().to_string(),
                degree: graph.degree(v.id()),
            })
            .collect();

        let mut summary = Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            edges,
            degrees,
            analysis: EulerClass::classify(graph),
            kind: None,
            is_cycle: false,
            steps: Vec::new(),
            duplicated_edges: Vec::new(),
            total_weight: 0.0,
        };

        if let Some(route) = route {
            let result = &route.result;
            summary.kind = Some(route.kind);
            summary.is_cycle = result.is_cycle;
            summary.total_weight = result.total_weight;
            summary.duplicated_edges = result
                .duplicate_edge_ids
                .iter()
                .filter_map(|&id| EdgeLine::new(graph, id))
                .collect();
            summary.steps = result
                .edge_order
                .iter()
                .enumerate()
                .filter_map(|(k, &id)| {
                    let original = result.original_of(id);
                    let weight = graph.edge(original)?.weight();
                    let from = *result.vertex_order.get(k)?;
                    let to = *result.vertex_order.get(k + 1)?;
                    Some(RouteStep {
                        edge: id,
                        original,
                        duplicate: result.is_duplicate(id),
                        from: graph.label(from),
                        to: graph.label(to),
                        weight,
                    })
                })
                .collect();
        }

        summary
    }

    /// 是否找到了路线
    pub fn has_route(&self) -> bool {
        self.kind.is_some()
    }

    /// 路线经过的顶点名称序列
    pub fn vertex_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.steps.iter().map(|s| s.from.clone()).collect();
        if let Some(last) = self.steps.last() {
            labels.push(last.to.clone());
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(labels: &[&str], edges: &[(usize, usize, f64)]) -> Graph {
        let mut graph = Graph::new();
        for label in labels {
            graph.add_vertex_with_label(*label);
        }
        for &(u, v, w) in edges {
            graph.add_edge(VertexId(u), VertexId(v), w).unwrap();
        }
        graph
    }

    #[test]
    fn test_classify() {
        let cycle = labelled(&["A", "B", "C"], &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        assert_eq!(EulerClass::classify(&cycle), EulerClass::Circuit);

        let path = labelled(&["A", "B", "C"], &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(
            EulerClass::classify(&path),
            EulerClass::Path {
                start: VertexId(0),
                end: VertexId(2)
            }
        );

        let star = labelled(&["O", "A", "B", "C"], &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
        assert_eq!(
            EulerClass::classify(&star),
            EulerClass::NotEulerian { odd_count: 4 }
        );

        let split = labelled(&["A", "B", "C", "D"], &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(EulerClass::classify(&split), EulerClass::Disconnected);
    }

    #[test]
    fn test_euler_summary() {
        let graph = labelled(&["A", "B", "C"], &[(0, 1, 1.0), (1, 2, 2.0)]);
        let summary = RouteSummary::build(&graph, &SolverConfig::default());

        assert_eq!(summary.kind, Some(RouteKind::Euler));
        assert!(!summary.is_cycle);
        assert_eq!(summary.vertex_labels(), vec!["A", "B", "C"]);
        assert!(summary.duplicated_edges.is_empty());
        assert_eq!(summary.total_weight, 3.0);
        assert_eq!(summary.degrees[1].degree, 2);
    }

    #[test]
    fn test_postman_summary_marks_duplicates() {
        let graph = labelled(&["O", "A", "B", "C"], &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
        let summary = RouteSummary::build(&graph, &SolverConfig::default());

        assert_eq!(summary.kind, Some(RouteKind::Postman));
        assert!(summary.is_cycle);
        let duplicates = summary.steps.iter().filter(|s| s.duplicate).count();
        assert_eq!(duplicates, summary.duplicated_edges.len());
        assert_eq!(summary.steps.len(), 3 + duplicates);
        for step in summary.steps.iter().filter(|s| s.duplicate) {
            assert!(step.original.0 < 3);
            assert!(step.edge.0 >= 3);
        }
        let labels = summary.vertex_labels();
        assert_eq!(labels.first(), labels.last());
    }

    #[test]
    fn test_summary_without_route() {
        let graph = labelled(&["A", "B", "C", "D"], &[(0, 1, 1.0), (2, 3, 1.0)]);
        let summary = RouteSummary::build(&graph, &SolverConfig::default());

        assert!(!summary.has_route());
        assert!(summary.steps.is_empty());
        assert_eq!(summary.edge_count, 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["analysis"]["kind"], "disconnected");
        assert!(json["kind"].is_null());
    }
}
