//! 图输入
//!
//! 命令行工具使用的两种输入：
//! - JSON 文档：顶点数量或名称列表 + 边列表（端点为顶点 ID）
//! - CSV 边列表：`from,to[,weight]`，端点为顶点名称，按首次出现顺序编号

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// 单个文档允许的最大顶点数
pub const MAX_VERTICES: usize = 1 << 20;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// 按扩展名推断，默认 JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            other => Err(format!("不支持的格式: {}", other)),
        }
    }
}

/// 顶点描述：数量或名称列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexSpec {
    Count(usize),
    Labels(Vec<String>),
}

/// 边描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub u: usize,
    pub v: usize,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// JSON 图文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// 省略时按边的最大端点推断顶点数量
    #[serde(default)]
    pub vertices: Option<VertexSpec>,
    pub edges: Vec<EdgeSpec>,
    /// 可选的求解配置
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

impl GraphDocument {
    /// 构建图
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(0, self.edges.len());
        match &self.vertices {
            Some(VertexSpec::Labels(labels)) => {
                for label in labels {
                    graph.add_vertex_with_label(label.clone());
                }
            }
            Some(VertexSpec::Count(n)) => {
                for _ in 0..checked_vertex_count(*n)? {
                    graph.add_vertex();
                }
            }
            None => {
                let n = self
                    .edges
                    .iter()
                    .map(|e| e.u.max(e.v).checked_add(1))
                    .try_fold(0usize, |acc, n| n.map(|n| acc.max(n)))
                    .ok_or_else(|| Error::Import("边的端点超出范围".to_string()))?;
                for _ in 0..checked_vertex_count(n)? {
                    graph.add_vertex();
                }
            }
        }

        for edge in &self.edges {
            graph.add_edge(VertexId(edge.u), VertexId(edge.v), edge.weight)?;
        }
        Ok(graph)
    }
}

fn checked_vertex_count(n: usize) -> Result<usize> {
    if n > MAX_VERTICES {
        return Err(Error::Import(format!(
            "顶点数 {} 超过上限 {}",
            n, MAX_VERTICES
        )));
    }
    Ok(n)
}

/// CSV 边记录
#[derive(Debug, Deserialize)]
struct CsvEdge {
    from: String,
    to: String,
    #[serde(default)]
    weight: Option<f64>,
}

/// 图导入器
#[derive(Debug, Default)]
pub struct GraphImporter {
    stats: ImportStats,
}

impl GraphImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次导入的统计
    pub fn stats(&self) -> &ImportStats {
        &self.stats
    }

    /// 按格式从文件导入；JSON 文档中的配置一并返回
    pub fn import_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: InputFormat,
    ) -> Result<(Graph, Option<SolverConfig>)> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        match format {
            InputFormat::Json => self.import_json(reader),
            InputFormat::Csv => Ok((self.import_csv(reader)?, None)),
        }
    }

    /// 从 JSON 文档导入
    pub fn import_json<R: Read>(&mut self, reader: R) -> Result<(Graph, Option<SolverConfig>)> {
        let start = Instant::now();
        let document: GraphDocument = serde_json::from_reader(reader)?;
        let graph = document.to_graph()?;
        self.finish(&graph, start);
        Ok((graph, document.config))
    }

    /// 从 CSV 边列表导入
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<Graph> {
        let start = Instant::now();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut graph = Graph::new();
        let mut ids: HashMap<String, VertexId> = HashMap::new();

        for (line, record) in csv_reader.deserialize::<CsvEdge>().enumerate() {
            let record = record?;
            if record.from.is_empty() || record.to.is_empty() {
                // 表头后第一行为第 2 行
                return Err(Error::Import(format!("第 {} 行缺少端点", line + 2)));
            }

            let u = *ids
                .entry(record.from.clone())
                .or_insert_with(|| graph.add_vertex_with_label(record.from.clone()));
            let v = *ids
                .entry(record.to.clone())
                .or_insert_with(|| graph.add_vertex_with_label(record.to.clone()));
            graph.add_edge(u, v, record.weight.unwrap_or_else(default_weight))?;
        }

        self.finish(&graph, start);
        Ok(graph)
    }

    fn finish(&mut self, graph: &Graph, start: Instant) {
        self.stats = ImportStats {
            vertices_imported: graph.vertex_count(),
            edges_imported: graph.edge_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            vertices = self.stats.vertices_imported,
            edges = self.stats.edges_imported,
            "graph imported"
        );
    }
}
