//! 算法暂存区
//!
//! 每次算法调用各自分配一份，按顶点槽位 ID 记录访问标记、当前距离和前驱，
//! 调用结束即丢弃，因此不同调用之间互不影响。

use crate::graph::VertexId;
use crate::types::{Weight, UNREACHED};

/// 单次算法调用的顶点状态
#[derive(Debug, Clone)]
pub struct Scratchpad {
    visited: Vec<bool>,
    distance: Vec<Weight>,
    predecessor: Vec<Option<VertexId>>,
}

impl Scratchpad {
    /// 为 capacity 个槽位创建暂存区，所有顶点未访问、距离为哨兵值
    pub fn new(capacity: usize) -> Self {
        Self {
            visited: vec![false; capacity],
            distance: vec![UNREACHED; capacity],
            predecessor: vec![None; capacity],
        }
    }

    /// 标记已访问，首次标记时返回 true
    pub fn visit(&mut self, id: VertexId) -> bool {
        match self.visited.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.get(id.index()).copied().unwrap_or(false)
    }

    /// 当前已知距离，未到达时为 `UNREACHED`
    pub fn distance(&self, id: VertexId) -> Weight {
        self.distance.get(id.index()).copied().unwrap_or(UNREACHED)
    }

    pub fn set_distance(&mut self, id: VertexId, distance: Weight) {
        if let Some(slot) = self.distance.get_mut(id.index()) {
            *slot = distance;
        }
    }

    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessor.get(id.index()).copied().flatten()
    }

    pub fn set_predecessor(&mut self, id: VertexId, predecessor: Option<VertexId>) {
        if let Some(slot) = self.predecessor.get_mut(id.index()) {
            *slot = predecessor;
        }
    }

    /// 已访问顶点数
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }
}
