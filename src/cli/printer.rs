//! 结果打印器
//!
//! 以表格形式输出路线摘要

use crate::algorithm::PathResult;
use crate::graph::{Graph, VertexId};
use crate::report::{EulerClass, RouteSummary};
use colored::Colorize;
use prettytable::{format, row, Table};

/// 结果打印器
pub struct Printer {
    /// 是否高亮复制边
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    /// 打印完整摘要
    pub fn print_summary(&self, summary: &RouteSummary) -> String {
        let mut output = String::new();
        output.push_str("Edges:\n");
        output.push_str(&self.format_edges(summary));
        output.push_str("Degrees:\n");
        output.push_str(&self.format_degrees(summary));
        output.push_str(&format!("Analysis: {}\n", describe(&summary.analysis, summary)));

        match summary.kind {
            Some(kind) => {
                let shape = if summary.is_cycle { "circuit" } else { "path" };
                output.push_str(&format!("\n{} route ({}):\n", kind, shape));
                output.push_str(&self.format_route(summary));
                if !summary.duplicated_edges.is_empty() {
                    output.push_str("Duplicated edges:\n");
                    output.push_str(&self.format_duplicates(summary));
                }
                output.push_str(&self.print_stats(summary));
            }
            None => output.push_str("\nNo route found\n"),
        }
        output
    }

    fn format_edges(&self, summary: &RouteSummary) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Edge", "From", "To", "Weight"]);
        for edge in &summary.edges {
            table.add_row(row![edge.id, edge.from, edge.to, edge.weight]);
        }
        table.to_string()
    }

    fn format_degrees(&self, summary: &RouteSummary) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Vertex", "Degree", "Parity"]);
        for line in &summary.degrees {
            let parity = if line.degree % 2 == 0 { "even" } else { "odd" };
            table.add_row(row![line.label, line.degree, parity]);
        }
        table.to_string()
    }

    fn format_route(&self, summary: &RouteSummary) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Step", "From", "To", "Edge", "Weight"]);
        for (k, step) in summary.steps.iter().enumerate() {
            let edge = if step.duplicate {
                let text = format!("{} (dup of {})", step.edge, step.original);
                if self.color {
                    text.yellow().to_string()
                } else {
                    text
                }
            } else {
                step.edge.to_string()
            };
            table.add_row(row![k + 1, step.from, step.to, edge, step.weight]);
        }
        table.to_string()
    }

    fn format_duplicates(&self, summary: &RouteSummary) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Original", "From", "To", "Weight"]);
        for edge in &summary.duplicated_edges {
            table.add_row(row![edge.id, edge.from, edge.to, edge.weight]);
        }
        table.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self, summary: &RouteSummary) -> String {
        let original: f64 = summary.edges.iter().map(|e| e.weight).sum();
        let mut table = Self::table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", summary.vertex_count]);
        table.add_row(row!["Edge Count", summary.edge_count]);
        table.add_row(row!["Route Length", summary.steps.len()]);
        table.add_row(row!["Duplicated", summary.duplicated_edges.len()]);
        table.add_row(row!["Edge Weight", original]);
        table.add_row(row!["Route Weight", summary.total_weight]);
        table.to_string()
    }

    /// 打印最短路径
    pub fn print_path(&self, graph: &Graph, path: Option<&PathResult>) -> String {
        let Some(path) = path else {
            return "Unreachable\n".to_string();
        };
        let labels: Vec<String> = path.vertices.iter().map(|&v| graph.label(v)).collect();
        format!(
            "Shortest path: {} (weight {})\n",
            labels.join(" -> "),
            path.total_weight
        )
    }
}

fn describe(class: &EulerClass, summary: &RouteSummary) -> String {
    let label = |id: &VertexId| {
        summary
            .degrees
            .iter()
            .find(|d| d.vertex == *id)
            .map(|d| d.label.clone())
            .unwrap_or_else(|| id.to_string())
    };
    match class {
        EulerClass::Circuit => "all degrees even, Euler circuit exists".to_string(),
        EulerClass::Path { start, end } => format!(
            "two odd vertices ({}, {}), Euler path exists",
            label(start),
            label(end)
        ),
        EulerClass::NotEulerian { odd_count } => {
            format!("{} odd vertices, edges must be repeated", odd_count)
        }
        EulerClass::Disconnected => "edges are not connected".to_string(),
    }
}
