//! 欧拉路径 / 欧拉回路
//!
//! Hierholzer 算法，用显式栈代替递归，遍历深度等于边数也不会耗尽调用栈。

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 欧拉遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerResult {
    /// 边的遍历顺序
    pub edge_order: Vec<EdgeId>,
    /// true 为回路，false 为路径
    pub is_cycle: bool,
}

impl EulerResult {
    /// 无边图的平凡回路
    pub fn trivial() -> Self {
        Self {
            edge_order: Vec::new(),
            is_cycle: true,
        }
    }
}

/// 遍历栈帧：当前顶点、进入该顶点的边、关联边游标
struct Frame {
    vertex: VertexId,
    via: Option<EdgeId>,
    cursor: usize,
}

/// 构造欧拉路径或回路，不存在时返回 None
pub fn build_tour(graph: &Graph) -> Option<EulerResult> {
    match try_build_tour(graph) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(error = %e, "no euler tour");
            None
        }
    }
}

/// 构造欧拉路径或回路，失败时给出原因
///
/// 无边的图返回平凡回路（空边序列，`is_cycle = true`）。
pub fn try_build_tour(graph: &Graph) -> Result<EulerResult> {
    if graph.edge_count() == 0 {
        return Ok(EulerResult::trivial());
    }
    if !graph.is_connected() {
        return Err(Error::NotConnected);
    }

    let odd = graph.odd_vertices();
    let (start, is_cycle) = match odd.as_slice() {
        [] => {
            let start = graph
                .vertex_ids()
                .find(|&v| graph.degree(v) > 0)
                .ok_or(Error::NotConnected)?;
            (start, true)
        }
        [first, _] => (*first, false),
        _ => return Err(Error::OddVertexCount(odd.len())),
    };

    debug!(start = %start, is_cycle, edges = graph.edge_count(), "building euler tour");

    let edge_order = hierholzer(graph, start)?;
    verify_tour(graph, &edge_order)?;

    Ok(EulerResult {
        edge_order,
        is_cycle,
    })
}

/// 从 start 出发贪心消耗未使用的边，按后序收集后反转
fn hierholzer(graph: &Graph, start: VertexId) -> Result<Vec<EdgeId>> {
    let mut used = vec![false; graph.edge_bound()];
    let mut circuit = Vec::with_capacity(graph.edge_count());
    let mut stack = vec![Frame {
        vertex: start,
        via: None,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let incident = graph.incident_edges(frame.vertex);
        while frame.cursor < incident.len() && used[incident[frame.cursor].0] {
            frame.cursor += 1;
        }

        if let Some(&edge_id) = incident.get(frame.cursor) {
            frame.cursor += 1;
            used[edge_id.0] = true;
            let next = graph
                .edge(edge_id)
                .and_then(|e| e.other(frame.vertex))
                .ok_or(Error::TourVerification(edge_id))?;
            stack.push(Frame {
                vertex: next,
                via: Some(edge_id),
                cursor: 0,
            });
        } else if let Some(done) = stack.pop() {
            if let Some(edge_id) = done.via {
                circuit.push(edge_id);
            }
        }
    }

    circuit.reverse();
    Ok(circuit)
}

/// 校验每条存活边恰好出现一次
fn verify_tour(graph: &Graph, edge_order: &[EdgeId]) -> Result<()> {
    let mut seen = vec![0usize; graph.edge_bound()];
    for &id in edge_order {
        if graph.edge(id).is_none() {
            warn!(edge = %id, "tour references unknown edge");
            return Err(Error::TourVerification(id));
        }
        seen[id.0] += 1;
    }

    if let Some(edge) = graph.edges().find(|e| seen[e.id().0] != 1) {
        warn!(edge = %edge.id(), count = seen[edge.id().0], "tour verification failed");
        return Err(Error::TourVerification(edge.id()));
    }
    Ok(())
}
