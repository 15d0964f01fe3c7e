//! 顶点定义
//!
//! 顶点持有两张按键排序的邻接表：出边按终点键索引，入边按起点键索引

use crate::algorithm::Scratchpad;
use crate::graph::edge::Edge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 顶点槽位 ID（图内唯一，删除后可被复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<K, V> {
    /// 槽位 ID
    id: VertexId,
    /// 键
    key: K,
    /// 负载
    value: V,
    /// 出边：终点键 -> 边
    out_edges: BTreeMap<K, Edge<K>>,
    /// 入边：起点键 -> 边
    in_edges: BTreeMap<K, Edge<K>>,
}

impl<K: Ord + Clone, V> Vertex<K, V> {
    /// 创建新顶点
    pub(crate) fn new(id: VertexId, key: K, value: V) -> Self {
        Self {
            id,
            key,
            value,
            out_edges: BTreeMap::new(),
            in_edges: BTreeMap::new(),
        }
    }

    /// 获取槽位 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取键
    pub fn key(&self) -> &K {
        &self.key
    }

    /// 获取负载
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// 替换负载，返回旧值
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub fn matches_key(&self, key: &K) -> bool {
        self.key == *key
    }

    pub fn same_key(&self, other: &Vertex<K, V>) -> bool {
        self.key == other.key
    }

    /// 获取指向 key 的出边
    pub fn out_edge(&self, key: &K) -> Option<&Edge<K>> {
        self.out_edges.get(key)
    }

    /// 获取来自 key 的入边
    pub fn in_edge(&self, key: &K) -> Option<&Edge<K>> {
        self.in_edges.get(key)
    }

    pub fn has_out_connection_to(&self, key: &K) -> bool {
        self.out_edges.contains_key(key)
    }

    pub fn has_in_connection_from(&self, key: &K) -> bool {
        self.in_edges.contains_key(key)
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// 所有出边（按终点键升序）
    pub fn out_edges(&self) -> impl DoubleEndedIterator<Item = &Edge<K>> {
        self.out_edges.values()
    }

    /// 所有入边（按起点键升序）
    pub fn in_edges(&self) -> impl DoubleEndedIterator<Item = &Edge<K>> {
        self.in_edges.values()
    }

    /// 遍历算法访问邻居的顺序：按终点键降序
    pub fn successors(&self) -> impl Iterator<Item = &Edge<K>> {
        self.out_edges.values().rev()
    }

    /// 出边按权重升序排列，同权重保持终点键顺序
    pub fn sort_out_edges_by_weight(&self) -> Vec<&Edge<K>> {
        let mut edges: Vec<&Edge<K>> = self.out_edges.values().collect();
        edges.sort_by(|a, b| a.compare_by_weight(b));
        edges
    }

    /// 第一个未访问的后继
    pub fn unvisited_successor(&self, scratch: &Scratchpad) -> Option<&Edge<K>> {
        self.successors().find(|edge| !scratch.is_visited(edge.end_id()))
    }

    // ==================== 邻接表维护（由 Graph 保证两侧同步） ====================

    pub(crate) fn out_edge_mut(&mut self, key: &K) -> Option<&mut Edge<K>> {
        self.out_edges.get_mut(key)
    }

    pub(crate) fn in_edge_mut(&mut self, key: &K) -> Option<&mut Edge<K>> {
        self.in_edges.get_mut(key)
    }

    pub(crate) fn insert_out_edge(&mut self, edge: Edge<K>) {
        self.out_edges.insert(edge.end().clone(), edge);
    }

    pub(crate) fn insert_in_edge(&mut self, edge: Edge<K>) {
        self.in_edges.insert(edge.start().clone(), edge);
    }

    pub(crate) fn remove_out_edge(&mut self, key: &K) -> Option<Edge<K>> {
        self.out_edges.remove(key)
    }

    pub(crate) fn remove_in_edge(&mut self, key: &K) -> Option<Edge<K>> {
        self.in_edges.remove(key)
    }

    /// 出边与入边两端邻居的键（去重）
    pub(crate) fn adjacent_keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self
            .out_edges
            .keys()
            .chain(self.in_edges.keys())
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

impl<K: fmt::Display, V> fmt::Display for Vertex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_WEIGHT;

    fn vertex(id: usize, key: &'static str) -> Vertex<&'static str, i32> {
        Vertex::new(VertexId::new(id), key, id as i32)
    }

    #[test]
    fn test_vertex_basic() {
        let mut v = vertex(0, "A");

        assert_eq!(v.id().index(), 0);
        assert_eq!(*v.key(), "A");
        assert_eq!(*v.value(), 0);
        assert_eq!(v.set_value(42), 0);
        assert_eq!(*v.value(), 42);
        assert!(v.matches_key(&"A"));
        assert_eq!(v.to_string(), "A");
    }

    #[test]
    fn test_vertex_adjacency() {
        let mut a = vertex(0, "A");
        a.insert_out_edge(Edge::new("A", VertexId::new(0), "C", VertexId::new(2), 5.0));
        a.insert_out_edge(Edge::new("A", VertexId::new(0), "B", VertexId::new(1), 2.0));
        a.insert_out_edge(Edge::new("A", VertexId::new(0), "D", VertexId::new(3), 2.0));
        a.insert_in_edge(Edge::new("B", VertexId::new(1), "A", VertexId::new(0), DEFAULT_WEIGHT));

        assert_eq!(a.out_degree(), 3);
        assert_eq!(a.in_degree(), 1);
        assert!(a.has_out_connection_to(&"C"));
        assert!(a.has_in_connection_from(&"B"));
        assert!(a.in_edge(&"C").is_none());

        let order: Vec<&str> = a.successors().map(|e| *e.end()).collect();
        assert_eq!(order, vec!["D", "C", "B"]);

        let by_weight: Vec<&str> = a.sort_out_edges_by_weight().iter().map(|e| *e.end()).collect();
        assert_eq!(by_weight, vec!["B", "D", "C"]);

        assert_eq!(a.adjacent_keys(), vec!["B", "C", "D"]);

        assert!(a.remove_out_edge(&"C").is_some());
        assert!(a.remove_out_edge(&"C").is_none());
        assert_eq!(a.out_degree(), 2);
    }

    #[test]
    fn test_unvisited_successor() {
        let mut a = vertex(0, "A");
        a.insert_out_edge(Edge::new("A", VertexId::new(0), "B", VertexId::new(1), DEFAULT_WEIGHT));
        a.insert_out_edge(Edge::new("A", VertexId::new(0), "C", VertexId::new(2), DEFAULT_WEIGHT));

        let mut scratch = Scratchpad::new(3);
        assert_eq!(a.unvisited_successor(&scratch).map(|e| *e.end()), Some("C"));

        scratch.visit(VertexId::new(2));
        assert_eq!(a.unvisited_successor(&scratch).map(|e| *e.end()), Some("B"));

        scratch.visit(VertexId::new(1));
        assert!(a.unvisited_successor(&scratch).is_none());
    }
}
