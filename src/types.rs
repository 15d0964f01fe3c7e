//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 边权重
pub type Weight = f64;

/// 未指定权重时边的默认权重
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// "尚未到达" 的哨兵距离，大于任何真实路径长度
pub const UNREACHED: Weight = f64::INFINITY;

/// 可全序比较的权重，用作优先队列的优先级
///
/// 基于 `f64::total_cmp`，NaN 排在所有数值之后。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedWeight(pub Weight);

impl OrderedWeight {
    pub fn new(weight: Weight) -> Self {
        Self(weight)
    }

    pub fn value(&self) -> Weight {
        self.0
    }
}

impl PartialEq for OrderedWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedWeight {}

impl PartialOrd for OrderedWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<Weight> for OrderedWeight {
    fn from(weight: Weight) -> Self {
        Self(weight)
    }
}

impl fmt::Display for OrderedWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
