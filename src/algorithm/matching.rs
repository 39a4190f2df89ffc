//! 奇度数顶点配对
//!
//! 先对每个奇度数顶点跑一次 Dijkstra 得到两两代价矩阵，
//! 再求最小权完美匹配。提供两种策略：
//!
//! - 枚举全排列并两两配对，O(k!)，仅适用于很少的奇度数顶点；
//! - 子集状态压缩 DP，O(2^k · k²)。
//!
//! 两种策略都只在代价严格更小时替换当前最优解，结果对固定输入是确定的。

use crate::algorithm::shortest_path::{dijkstra, PathResult, ShortestPathTree};
use crate::config::{MatchingStrategy, SolverConfig};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::Cost;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 奇度数顶点之间的最短路径代价矩阵
#[derive(Debug, Clone)]
pub struct CostMatrix {
    vertices: Vec<VertexId>,
    trees: Vec<ShortestPathTree>,
}

impl CostMatrix {
    /// 对每个顶点跑一次 Dijkstra
    pub fn build(graph: &Graph, vertices: &[VertexId]) -> Self {
        let trees = vertices.iter().map(|&v| dijkstra(graph, v)).collect();
        Self {
            vertices: vertices.to_vec(),
            trees,
        }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 第 i 个与第 j 个顶点之间的代价
    pub fn cost(&self, i: usize, j: usize) -> Cost {
        self.trees[i].cost(self.vertices[j])
    }

    /// 第 i 个到第 j 个顶点的最短路径
    pub fn path(&self, i: usize, j: usize) -> Option<PathResult> {
        self.trees[i].path_to(self.vertices[j])
    }

    /// 展开为稠密矩阵
    pub fn to_dense(&self) -> Vec<Vec<Cost>> {
        (0..self.len())
            .map(|i| (0..self.len()).map(|j| self.cost(i, j)).collect())
            .collect()
    }
}

/// 一组配对的顶点及其最短路径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub a: VertexId,
    pub b: VertexId,
    pub cost: f64,
    pub path: PathResult,
}

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    pub pairs: Vec<MatchedPair>,
    pub total_cost: f64,
}

/// 奇度数顶点匹配器
pub struct OddVertexMatcher<'a> {
    graph: &'a Graph,
    config: SolverConfig,
}

impl<'a> OddVertexMatcher<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_config(graph, SolverConfig::default())
    }

    pub fn with_config(graph: &'a Graph, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    /// 求最小代价配对
    pub fn match_vertices(&self, odd: &[VertexId]) -> Result<Matching> {
        if odd.len() % 2 == 1 {
            return Err(Error::OddVertexParity(odd.len()));
        }
        let limit = self.config.matching_limit();
        if odd.len() > limit {
            return Err(Error::MatchingTooLarge {
                count: odd.len(),
                limit,
            });
        }

        let matrix = CostMatrix::build(self.graph, odd);
        let dense = matrix.to_dense();
        let (pairs, total) = match self.config.matching {
            MatchingStrategy::Exhaustive => min_pairing_exhaustive(&dense),
            MatchingStrategy::Bitmask => min_pairing_bitmask(&dense),
        }
        .ok_or(Error::Disconnected)?;

        debug!(
            strategy = %self.config.matching,
            odd = odd.len(),
            total_cost = total.value(),
            "odd vertices matched"
        );

        let pairs = pairs
            .into_iter()
            .map(|(i, j)| {
                let path = matrix.path(i, j).ok_or(Error::Disconnected)?;
                Ok(MatchedPair {
                    a: matrix.vertices()[i],
                    b: matrix.vertices()[j],
                    cost: path.total_weight,
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Matching {
            pairs,
            total_cost: total.value(),
        })
    }
}

/// 枚举全排列，相邻两个元素配对；按字典序枚举，首个最小值胜出
///
/// 元素个数为奇数、超过 `SolverConfig::MAX_EXHAUSTIVE_LIMIT` 或所有配对都不可达时返回 None。
pub fn min_pairing_exhaustive(costs: &[Vec<Cost>]) -> Option<(Vec<(usize, usize)>, Cost)> {
    let n = costs.len();
    if n % 2 == 1 || n > SolverConfig::MAX_EXHAUSTIVE_LIMIT {
        return None;
    }
    let mut perm: Vec<usize> = (0..n).collect();
    let mut best: Option<(Vec<usize>, Cost)> = None;

    loop {
        let cost = perm
            .chunks(2)
            .fold(Cost::ZERO, |acc, pair| acc + costs[pair[0]][pair[1]]);
        let improves = match &best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if cost.is_finite() && improves {
            best = Some((perm.clone(), cost));
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    best.map(|(perm, cost)| {
        let pairs = perm.chunks(2).map(|pair| (pair[0], pair[1])).collect();
        (pairs, cost)
    })
}

/// 字典序下一个排列；已是最后一个时返回 false
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

/// 子集 DP：`dp[mask]` 为集合 mask 内顶点完美匹配的最小代价
///
/// 集合中最小的顶点依次尝试与较大的顶点配对，代价相同时保留先出现的候选。
/// 顶点数超过 `SolverConfig::MAX_BITMASK_LIMIT` 时返回 None。
pub fn min_pairing_bitmask(costs: &[Vec<Cost>]) -> Option<(Vec<(usize, usize)>, Cost)> {
    let n = costs.len();
    if n > SolverConfig::MAX_BITMASK_LIMIT {
        return None;
    }
    let full = 1usize.checked_shl(n as u32)? - 1;
    let mut dp = vec![Cost::INFINITY; full + 1];
    let mut choice = vec![0u8; full + 1];
    dp[0] = Cost::ZERO;

    for mask in 1..=full {
        if mask.count_ones() % 2 == 1 {
            continue;
        }
        let i = mask.trailing_zeros() as usize;
        let rest = mask & !(1 << i);
        let mut candidates = rest;
        while candidates != 0 {
            let j = candidates.trailing_zeros() as usize;
            candidates &= candidates - 1;

            let cost = dp[rest & !(1 << j)] + costs[i][j];
            if cost < dp[mask] {
                dp[mask] = cost;
                choice[mask] = j as u8;
            }
        }
    }

    if !dp[full].is_finite() {
        return None;
    }

    let mut pairs = Vec::with_capacity(n / 2);
    let mut mask = full;
    while mask != 0 {
        let i = mask.trailing_zeros() as usize;
        let j = choice[mask] as usize;
        pairs.push((i, j));
        mask &= !(1 << i) & !(1 << j);
    }
    Some((pairs, dp[full]))
}
