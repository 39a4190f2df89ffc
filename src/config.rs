//! 求解器配置

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 奇度数顶点的最小权完美匹配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingStrategy {
    /// 状态压缩 DP，O(2^k · k²)
    #[default]
    Bitmask,
    /// 枚举全排列，O(k!)，只适合很少的奇度数顶点
    Exhaustive,
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingStrategy::Bitmask => write!(f, "bitmask"),
            MatchingStrategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl FromStr for MatchingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bitmask" | "dp" => Ok(MatchingStrategy::Bitmask),
            "exhaustive" | "brute-force" => Ok(MatchingStrategy::Exhaustive),
            other => Err(format!("未知的匹配策略: {}", other)),
        }
    }
}

/// 中国邮路求解配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 匹配策略
    pub matching: MatchingStrategy,
    /// 枚举策略允许的最大奇度数顶点数
    pub exhaustive_limit: usize,
    /// 状态压缩策略允许的最大奇度数顶点数
    pub bitmask_limit: usize,
}

impl SolverConfig {
    pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 10;
    pub const DEFAULT_BITMASK_LIMIT: usize = 20;
    /// 配置值之上的硬上限：DP 表有 2^k 项，全排列有 k! 种
    pub const MAX_BITMASK_LIMIT: usize = 24;
    pub const MAX_EXHAUSTIVE_LIMIT: usize = 12;

    pub fn with_matching(mut self, matching: MatchingStrategy) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    pub fn with_bitmask_limit(mut self, limit: usize) -> Self {
        self.bitmask_limit = limit;
        self
    }

    /// 当前策略的奇度数顶点上限，不超过对应的硬上限
    pub fn matching_limit(&self) -> usize {
        match self.matching {
            MatchingStrategy::Bitmask => self.bitmask_limit.min(Self::MAX_BITMASK_LIMIT),
            MatchingStrategy::Exhaustive => self.exhaustive_limit.min(Self::MAX_EXHAUSTIVE_LIMIT),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            matching: MatchingStrategy::default(),
            exhaustive_limit: Self::DEFAULT_EXHAUSTIVE_LIMIT,
            bitmask_limit: Self::DEFAULT_BITMASK_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.matching, MatchingStrategy::Bitmask);
        assert_eq!(config.matching_limit(), 20);

        let config = config.with_matching(MatchingStrategy::Exhaustive);
        assert_eq!(config.matching_limit(), 10);
    }

    #[test]
    fn test_config_from_json() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"matching": "exhaustive", "exhaustive_limit": 8}"#).unwrap();
        assert_eq!(config.matching, MatchingStrategy::Exhaustive);
        assert_eq!(config.exhaustive_limit, 8);
        assert_eq!(config.bitmask_limit, SolverConfig::DEFAULT_BITMASK_LIMIT);

        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_limits_are_capped() {
        let config = SolverConfig::default().with_bitmask_limit(64);
        assert_eq!(config.matching_limit(), SolverConfig::MAX_BITMASK_LIMIT);

        let config: SolverConfig =
            serde_json::from_str(r#"{"matching": "exhaustive", "exhaustive_limit": 1000}"#)
                .unwrap();
        assert_eq!(config.matching_limit(), SolverConfig::MAX_EXHAUSTIVE_LIMIT);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("bitmask".parse::<MatchingStrategy>(), Ok(MatchingStrategy::Bitmask));
        assert_eq!("Exhaustive".parse::<MatchingStrategy>(), Ok(MatchingStrategy::Exhaustive));
        assert!("blossom".parse::<MatchingStrategy>().is_err());
    }
}
