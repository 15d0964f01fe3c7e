//! 图数据结构
//!
//! 顶点存放在图持有的槽位数组中，边只通过键和槽位 ID 引用顶点。
//! 所有结构性修改都经由 Graph 完成，以保证出边表与入边表始终成对出现。

use super::edge::Edge;
use super::index::KeyIndex;
use super::vertex::{Vertex, VertexId};
use crate::types::{Weight, DEFAULT_WEIGHT};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, trace};

/// 图
#[derive(Debug, Clone)]
pub struct Graph<K, V> {
    /// 顶点槽位
    slots: Vec<Option<Vertex<K, V>>>,
    /// 键索引
    index: KeyIndex<K>,
    /// 生成树算法累计的总权重
    total_cost: Weight,
}

impl<K: Ord, V> Graph<K, V> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: KeyIndex::new(),
            total_cost: 0.0,
        }
    }

    /// 预分配槽位的空图
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: KeyIndex::new(),
            total_cost: 0.0,
        }
    }
}

impl<K: Ord, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone + Debug, V> Graph<K, V> {
    // ==================== 槽位访问 ====================

    pub(crate) fn slot(&self, id: VertexId) -> Option<&Vertex<K, V>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Vertex<K, V>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// 槽位上限，算法暂存区按此大小分配
    pub(crate) fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// 键对应的槽位 ID
    pub fn id_of(&self, key: &K) -> Option<VertexId> {
        self.index.get(key)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点；键已存在时只替换负载，返回旧负载
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if let Some(id) = self.index.get(&key) {
            trace!(key = ?key, "更新顶点负载");
            return self.slot_mut(id).map(|v| v.set_value(value));
        }

        let id = self.index.allocate(key.clone());
        debug!(key = ?key, id = id.index(), "添加顶点");
        let vertex = Vertex::new(id, key, value);
        if id.index() == self.slots.len() {
            self.slots.push(Some(vertex));
        } else {
            self.slots[id.index()] = Some(vertex);
        }
        None
    }

    /// 以给定顶点的键和负载的副本添加顶点，不复制边
    pub fn add_copy_of(&mut self, vertex: &Vertex<K, V>) -> Option<V>
    where
        V: Clone,
    {
        self.add(vertex.key().clone(), vertex.value().clone())
    }

    /// 删除顶点及所有与之相连的边
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(id) = self.index.get(key) else {
            return false;
        };
        let adjacent = match self.slot(id) {
            Some(vertex) => vertex.adjacent_keys(),
            None => return false,
        };

        for other_key in &adjacent {
            if let Some(other) = self.index.get(other_key) {
                self.unlink(other, id);
                self.unlink(id, other);
            }
        }

        self.slots[id.index()] = None;
        self.index.release(key);
        debug!(key = ?key, severed = adjacent.len(), "删除顶点");
        true
    }

    /// 获取顶点数量
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// 获取负载
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_vertex(key).map(Vertex::value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.index.get(key)?;
        self.slot_mut(id).map(Vertex::value_mut)
    }

    /// 获取顶点
    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K, V>> {
        self.slot(self.index.get(key)?)
    }

    /// 按键升序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, V>> {
        self.index.ids().filter_map(move |id| self.slot(id))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.index.keys()
    }

    pub fn out_degree(&self, key: &K) -> Option<usize> {
        self.get_vertex(key).map(Vertex::out_degree)
    }

    pub fn in_degree(&self, key: &K) -> Option<usize> {
        self.get_vertex(key).map(Vertex::in_degree)
    }

    /// 生成树算法设置的总权重
    pub fn cost(&self) -> Weight {
        self.total_cost
    }

    pub fn set_cost(&mut self, cost: Weight) {
        self.total_cost = cost;
    }

    // ==================== 边操作 ====================

    /// 建立 start -> end 的边；已存在时只更新权重并返回 false
    fn link(&mut self, start: VertexId, end: VertexId, weight: Weight) -> bool {
        let (Some(start_key), Some(end_key)) = (
            self.slot(start).map(|v| v.key().clone()),
            self.slot(end).map(|v| v.key().clone()),
        ) else {
            return false;
        };

        if let Some(edge) = self.slot_mut(start).and_then(|v| v.out_edge_mut(&end_key)) {
            edge.set_weight(weight);
            if let Some(mirror) = self.slot_mut(end).and_then(|v| v.in_edge_mut(&start_key)) {
                mirror.set_weight(weight);
            }
            trace!(start = ?start_key, end = ?end_key, weight, "边已存在，更新权重");
            return false;
        }

        let edge = Edge::new(start_key, start, end_key, end, weight);
        trace!(start = ?edge.start(), end = ?edge.end(), weight, "添加边");
        if let Some(vertex) = self.slot_mut(start) {
            vertex.insert_out_edge(edge.clone());
        }
        if let Some(vertex) = self.slot_mut(end) {
            vertex.insert_in_edge(edge);
        }
        true
    }

    /// 删除 start -> end 的边及其镜像入边
    fn unlink(&mut self, start: VertexId, end: VertexId) -> bool {
        let (Some(start_key), Some(end_key)) = (
            self.slot(start).map(|v| v.key().clone()),
            self.slot(end).map(|v| v.key().clone()),
        ) else {
            return false;
        };

        let removed = self
            .slot_mut(start)
            .and_then(|v| v.remove_out_edge(&end_key))
            .is_some();
        if removed {
            if let Some(vertex) = self.slot_mut(end) {
                vertex.remove_in_edge(&start_key);
            }
            trace!(start = ?start_key, end = ?end_key, "删除边");
        }
        removed
    }

    fn endpoints(&self, start: &K, end: &K) -> Option<(VertexId, VertexId)> {
        Some((self.index.get(start)?, self.index.get(end)?))
    }

    /// 默认权重的有向边
    pub fn directed_connect(&mut self, start: &K, end: &K) -> bool {
        self.directed_connect_with_weight(start, end, DEFAULT_WEIGHT)
    }

    /// 有向边；任一顶点缺失或边已存在（此时更新权重）时返回 false
    pub fn directed_connect_with_weight(&mut self, start: &K, end: &K, weight: Weight) -> bool {
        match self.endpoints(start, end) {
            Some((s, e)) => self.link(s, e, weight),
            None => false,
        }
    }

    /// 默认权重的无向连接
    pub fn connect(&mut self, start: &K, end: &K) -> bool {
        self.connect_with_weight(start, end, DEFAULT_WEIGHT)
    }

    /// 双向建边，只有两个方向都是新建时才返回 true
    pub fn connect_with_weight(&mut self, start: &K, end: &K, weight: Weight) -> bool {
        let Some((s, e)) = self.endpoints(start, end) else {
            return false;
        };
        let forward = self.link(s, e, weight);
        let reverse = self.link(e, s, weight);
        forward && reverse
    }

    /// 删除 start -> end
    pub fn disconnect(&mut self, start: &K, end: &K) -> bool {
        match self.endpoints(start, end) {
            Some((s, e)) => self.unlink(s, e),
            None => false,
        }
    }

    /// 删除两个方向的边；两个方向都会尝试，都存在时返回 true
    pub fn disconnect_all(&mut self, start: &K, end: &K) -> bool {
        let Some((s, e)) = self.endpoints(start, end) else {
            return false;
        };
        let forward = self.unlink(s, e);
        if s == e {
            return forward;
        }
        let reverse = self.unlink(e, s);
        forward && reverse
    }

    /// 修改边权重，出边与镜像入边同时更新
    pub fn change_edge_weight(&mut self, start: &K, end: &K, weight: Weight) -> bool {
        let Some((s, e)) = self.endpoints(start, end) else {
            return false;
        };
        if !self.has_edge(start, end) {
            return false;
        }
        !self.link(s, e, weight)
    }

    /// 获取 start -> end 的权重
    pub fn out_edge_weight(&self, start: &K, end: &K) -> Option<Weight> {
        self.get_vertex(start)?.out_edge(end).map(Edge::weight)
    }

    /// 只检查 start -> end 方向
    pub fn has_edge(&self, start: &K, end: &K) -> bool {
        self.get_vertex(start)
            .map(|v| v.has_out_connection_to(end))
            .unwrap_or(false)
    }

    /// 两个方向都存在且权重相同
    pub fn is_undirected(&self, start: &K, end: &K) -> bool {
        match (self.out_edge_weight(start, end), self.out_edge_weight(end, start)) {
            (Some(forward), Some(reverse)) => forward == reverse,
            _ => false,
        }
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices().map(Vertex::out_degree).sum()
    }

    /// 所有出边按终点键汇总成一张表（仅用于诊断）
    ///
    /// 不同起点指向同一终点的边会互相覆盖，只保留按起点键序最后一条。
    pub fn edges(&self) -> BTreeMap<K, Edge<K>> {
        let mut edges = BTreeMap::new();
        for vertex in self.vertices() {
            for edge in vertex.out_edges() {
                edges.insert(edge.end().clone(), edge.clone());
            }
        }
        edges
    }

    /// 全图所有出边按权重升序排列（同权重按起点、终点键排序）
    ///
    /// `start` 只是种子顶点：缺失时返回空，否则结果覆盖整张图。
    pub fn edges_by_weight(&self, start: &K) -> Vec<&Edge<K>> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut edges: Vec<&Edge<K>> = self.vertices().flat_map(|v| v.out_edges()).collect();
        edges.sort_by(|a, b| a.compare_for_queue(b));
        edges
    }
}
