//! RouteGraph CLI 工具
//!
//! 读取图文件，输出欧拉路线或中国邮路

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use routegraph::algorithm::{auto_route, PathFinder, Route};
use routegraph::cli::Printer;
use routegraph::config::MatchingStrategy;
use routegraph::graph::{Graph, VertexId};
use routegraph::import::{GraphImporter, InputFormat};
use routegraph::report::RouteSummary;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 求解模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// 先尝试欧拉路线，不存在时求中国邮路
    Auto,
    /// 只求欧拉路线
    Euler,
    /// 只求中国邮路
    Postman,
}

#[derive(Parser, Debug)]
#[command(name = "routegraph-cli")]
#[command(about = "RouteGraph 欧拉路线与中国邮路求解工具")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: json, csv（默认按扩展名推断）
    #[arg(short, long)]
    format: Option<InputFormat>,

    /// 求解模式
    #[arg(short, long, value_enum, default_value = "auto")]
    mode: Mode,

    /// 奇度数顶点配对策略: bitmask, exhaustive
    #[arg(long)]
    matching: Option<MatchingStrategy>,

    /// 穷举配对允许的最大奇度数顶点数量
    #[arg(long)]
    exhaustive_limit: Option<usize>,

    /// 输出两个顶点（名称或 ID）之间的最短路径
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    path: Option<Vec<String>>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 禁用颜色
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("routegraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = args
        .format
        .unwrap_or_else(|| InputFormat::from_path(&args.input));
    let mut importer = GraphImporter::new();
    let (graph, file_config) = importer
        .import_file(&args.input, format)
        .with_context(|| format!("无法读取图文件 {:?}", args.input))?;

    let stats = importer.stats();
    info!(
        vertices = stats.vertices_imported,
        edges = stats.edges_imported,
        duration_ms = stats.duration_ms,
        "graph loaded"
    );

    // 命令行参数优先于文件中的配置
    let mut config = file_config.unwrap_or_default();
    if let Some(matching) = args.matching {
        config = config.with_matching(matching);
    }
    if let Some(limit) = args.exhaustive_limit {
        config = config.with_exhaustive_limit(limit);
    }

    let printer = Printer::new(!args.no_color);

    if let Some(endpoints) = &args.path {
        let from = resolve_vertex(&graph, &endpoints[0])?;
        let to = resolve_vertex(&graph, &endpoints[1])?;
        let path = PathFinder::new(&graph).shortest_path(from, to);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&path)?);
        } else {
            print!("{}", printer.print_path(&graph, path.as_ref()));
        }
        if path.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let route = match args.mode {
        Mode::Auto => auto_route(&graph, &config),
        Mode::Euler => Route::euler(&graph)
            .map_err(|e| warn!(error = %e, "no Euler route"))
            .ok(),
        Mode::Postman => Route::postman(&graph, &config)
            .map_err(|e| warn!(error = %e, "no postman route"))
            .ok(),
    };
    let summary = RouteSummary::from_route(&graph, route.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", printer.print_summary(&summary));
    }

    if !summary.has_route() {
        std::process::exit(1);
    }
    Ok(())
}

/// 按名称查找顶点，找不到时按数字 ID 解析
fn resolve_vertex(graph: &Graph, token: &str) -> anyhow::Result<VertexId> {
    if let Some(vertex) = graph.vertices().find(|v| v.label() == token) {
        return Ok(vertex.id());
    }
    match token.parse::<usize>() {
        Ok(id) if graph.contains_vertex(VertexId(id)) => Ok(VertexId(id)),
        _ => bail!("未找到顶点: {}", token),
    }
}
