//! 边定义
//!
//! 一条带权有向边，只记录两端顶点的键和槽位 ID，不持有顶点本身

use crate::graph::graph::Graph;
use crate::graph::vertex::VertexId;
use crate::types::Weight;
use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// 边
#[derive(Debug, Clone)]
pub struct Edge<K> {
    /// 起点键
    start: K,
    /// 终点键
    end: K,
    /// 起点槽位
    start_id: VertexId,
    /// 终点槽位
    end_id: VertexId,
    /// 权重
    weight: Weight,
}

impl<K: Ord> Edge<K> {
    /// 创建新边
    pub(crate) fn new(
        start: K,
        start_id: VertexId,
        end: K,
        end_id: VertexId,
        weight: Weight,
    ) -> Self {
        Self {
            start,
            end,
            start_id,
            end_id,
            weight,
        }
    }

    /// 获取起点键
    pub fn start(&self) -> &K {
        &self.start
    }

    /// 获取终点键
    pub fn end(&self) -> &K {
        &self.end
    }

    /// 获取起点槽位
    pub fn start_id(&self) -> VertexId {
        self.start_id
    }

    /// 获取终点槽位
    pub fn end_id(&self) -> VertexId {
        self.end_id
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// 是否从给定键出发
    pub fn starts_at(&self, key: &K) -> bool {
        self.start == *key
    }

    /// 是否终止于给定键
    pub fn ends_at(&self, key: &K) -> bool {
        self.end == *key
    }

    /// 自环
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    /// 两端相同即视为同一条边，权重不参与比较
    pub fn same_endpoints(&self, other: &Edge<K>) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// 按权重比较，相同权重视为相等
    pub fn compare_by_weight(&self, other: &Edge<K>) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }

    /// 起点键与给定键比较
    pub fn compare_start_by_key(&self, key: &K) -> Ordering {
        self.start.cmp(key)
    }

    /// 权重优先，再按 (起点, 终点) 排序，保证结果确定
    pub(crate) fn compare_for_queue(&self, other: &Edge<K>) -> Ordering {
        self.compare_by_weight(other)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<K: Ord + Clone + Debug> Edge<K> {
    /// 图中存在反向边且权重相同
    pub fn is_undirected<V>(&self, graph: &Graph<K, V>) -> bool {
        graph.is_undirected(&self.start, &self.end)
    }
}

impl<K: Ord> PartialEq for Edge<K> {
    fn eq(&self, other: &Self) -> bool {
        self.same_endpoints(other)
    }
}

impl<K: Ord> Eq for Edge<K> {}

impl<K: fmt::Display> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_WEIGHT;

    fn edge(start: &'static str, end: &'static str, weight: Weight) -> Edge<&'static str> {
        Edge::new(start, VertexId::new(0), end, VertexId::new(1), weight)
    }

    #[test]
    fn test_edge_equality_ignores_weight() {
        let a = edge("A", "B", 1.0);
        let b = edge("A", "B", 7.5);
        let c = edge("B", "A", 1.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_endpoints(&b));
    }

    #[test]
    fn test_edge_endpoints() {
        let e = Edge::new("A", VertexId::new(3), "B", VertexId::new(4), DEFAULT_WEIGHT);

        assert!(e.starts_at(&"A"));
        assert!(e.ends_at(&"B"));
        assert!(!e.ends_at(&"A"));
        assert_eq!(e.weight(), DEFAULT_WEIGHT);
        assert_eq!(e.start_id(), VertexId::new(3));
        assert_eq!(e.end_id(), VertexId::new(4));
        assert!(!e.is_loop());
        assert_eq!(e.to_string(), "A -> B");
    }

    #[test]
    fn test_edge_ordering() {
        let light = edge("C", "D", 0.5);
        let heavy = edge("A", "B", 3.0);
        let tie = edge("A", "Z", 0.5);

        assert_eq!(light.compare_by_weight(&heavy), Ordering::Less);
        assert_eq!(light.compare_by_weight(&tie), Ordering::Equal);
        assert_eq!(tie.compare_for_queue(&light), Ordering::Less);
        assert_eq!(heavy.compare_start_by_key(&"B"), Ordering::Less);
    }
}
