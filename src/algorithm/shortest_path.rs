//! Dijkstra 最短路径
//!
//! 优先队列按当前距离排序，通过 `push_increase` 实现降键；每个顶点只结算一次。

use super::scratch::Scratchpad;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId};
use crate::types::{OrderedWeight, Weight, UNREACHED};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<K> {
    /// 路径上的顶点键序列（含起点和终点）
    pub vertices: Vec<K>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: Weight,
}

impl<K> PathResult<K> {
    fn with_start(start: K) -> Self {
        Self {
            vertices: vec![start],
            length: 0,
            total_weight: 0.0,
        }
    }
}

/// 单源最短路径树
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTree<K: Ord> {
    /// 源点
    pub source: K,
    /// 已到达顶点的最短距离
    distances: BTreeMap<K, Weight>,
    /// 已到达顶点的前驱
    predecessors: BTreeMap<K, K>,
}

impl<K: Ord + Clone> ShortestPathTree<K> {
    /// 到 target 的最短距离，未到达时为 `UNREACHED`
    pub fn distance_to(&self, target: &K) -> Weight {
        self.distances.get(target).copied().unwrap_or(UNREACHED)
    }

    pub fn reachable(&self, target: &K) -> bool {
        self.distances.contains_key(target)
    }

    /// 已到达的顶点数（含源点）
    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// 沿前驱回溯出到 target 的路径
    pub fn path_to(&self, target: &K) -> Option<PathResult<K>> {
        let total_weight = *self.distances.get(target)?;
        if *target == self.source {
            return Some(PathResult::with_start(target.clone()));
        }

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            vertices.push(current.clone());
        }
        vertices.reverse();

        Some(PathResult {
            length: vertices.len() - 1,
            vertices,
            total_weight,
        })
    }
}

/// 路径查找器
pub struct PathFinder<'a, K, V> {
    graph: &'a Graph<K, V>,
}

impl<'a, K: Ord + Clone + Debug, V> PathFinder<'a, K, V> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph<K, V>) -> Self {
        Self { graph }
    }

    /// 从 start 出发计算最短路径树
    pub fn shortest_path_tree(&self, start: &K) -> Result<ShortestPathTree<K>> {
        let source = self
            .graph
            .id_of(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;
        let scratch = self.settle(source);

        let mut distances = BTreeMap::new();
        let mut predecessors = BTreeMap::new();
        for vertex in self.graph.vertices() {
            let distance = scratch.distance(vertex.id());
            if distance == UNREACHED {
                continue;
            }
            distances.insert(vertex.key().clone(), distance);
            if let Some(prev) = scratch
                .predecessor(vertex.id())
                .and_then(|id| self.graph.slot(id))
            {
                predecessors.insert(vertex.key().clone(), prev.key().clone());
            }
        }

        debug!(start = ?start, reached = distances.len(), "最短路径树计算完成");
        Ok(ShortestPathTree {
            source: start.clone(),
            distances,
            predecessors,
        })
    }

    /// start 到 target 的最短路径；不可达时为 None
    pub fn shortest_path(&self, start: &K, target: &K) -> Result<Option<PathResult<K>>> {
        if !self.graph.contains(target) {
            return Err(Error::vertex_not_found(target));
        }
        Ok(self.shortest_path_tree(start)?.path_to(target))
    }

    fn settle(&self, source: VertexId) -> Scratchpad {
        let mut scratch = Scratchpad::new(self.graph.capacity());
        let mut queue = PriorityQueue::new();
        scratch.set_distance(source, 0.0);
        queue.push(source, Reverse((OrderedWeight(0.0), source)));

        while let Some((current, _)) = queue.pop() {
            scratch.visit(current);
            let Some(vertex) = self.graph.slot(current) else {
                continue;
            };
            let base = scratch.distance(current);
            trace!(vertex = ?vertex.key(), distance = base, "结算顶点");

            for edge in vertex.sort_out_edges_by_weight() {
                if edge.weight() < 0.0 {
                    warn!(start = ?edge.start(), end = ?edge.end(), weight = edge.weight(), "Dijkstra 遇到负权边，结果可能不正确");
                }
                let next = edge.end_id();
                if scratch.is_visited(next) {
                    continue;
                }
                let candidate = base + edge.weight();
                if candidate < scratch.distance(next) {
                    scratch.set_distance(next, candidate);
                    scratch.set_predecessor(next, Some(current));
                    queue.push_increase(next, Reverse((OrderedWeight(candidate), next)));
                }
            }
        }

        scratch
    }
}

impl<K: Ord + Clone + Debug, V> Graph<K, V> {
    /// 单源最短路径树
    pub fn shortest_path_tree(&self, start: &K) -> Result<ShortestPathTree<K>> {
        PathFinder::new(self).shortest_path_tree(start)
    }

    /// Dijkstra 最短路径
    pub fn dij_shortest_path(&self, start: &K, target: &K) -> Result<Option<PathResult<K>>> {
        PathFinder::new(self).shortest_path(start, target)
    }

    /// 与 `dij_shortest_path` 相同的路径，以顶点引用返回；不可达时为空
    pub fn dij_shortest_path_vertices(&self, start: &K, target: &K) -> Result<Vec<&Vertex<K, V>>> {
        let path = self.dij_shortest_path(start, target)?;
        Ok(path
            .map(|p| p.vertices.iter().filter_map(|k| self.get_vertex(k)).collect())
            .unwrap_or_default())
    }
}
