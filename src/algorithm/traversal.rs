//! 遍历算法
//!
//! 深度优先、广度优先、拓扑排序以及由遍历生成的生成图。
//! 邻居按终点键降序访问，每次调用都使用独立的暂存区。

use super::scratch::Scratchpad;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex, VertexId};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt::Debug;
use tracing::{debug, trace};

/// DFS 栈帧：顶点后继的快照加游标
struct Frame<'a, K> {
    edges: SmallVec<[&'a Edge<K>; 8]>,
    cursor: usize,
}

impl<'a, K: Ord + Clone> Frame<'a, K> {
    fn new<V>(vertex: &'a Vertex<K, V>) -> Self {
        Self {
            edges: vertex.successors().collect(),
            cursor: 0,
        }
    }

    /// 从游标处继续，返回下一条通向未访问顶点的边
    fn next_unvisited(&mut self, scratch: &Scratchpad) -> Option<&'a Edge<K>> {
        while let Some(edge) = self.edges.get(self.cursor).copied() {
            self.cursor += 1;
            if !scratch.is_visited(edge.end_id()) {
                return Some(edge);
            }
        }
        None
    }
}

impl<K: Ord + Clone + Debug, V> Graph<K, V> {
    /// 深度优先遍历，按先序回调每个新发现的顶点及发现它的边
    fn depth_first_walk<'a, F>(&'a self, start: VertexId, mut discover: F)
    where
        F: FnMut(&'a Vertex<K, V>, Option<&'a Edge<K>>),
    {
        let Some(root) = self.slot(start) else {
            return;
        };
        let mut scratch = Scratchpad::new(self.capacity());
        scratch.visit(start);
        discover(root, None);

        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.next_unvisited(&scratch) else {
                stack.pop();
                continue;
            };
            let Some(child) = self.slot(edge.end_id()) else {
                continue;
            };
            scratch.visit(child.id());
            trace!(from = ?edge.start(), to = ?edge.end(), "DFS 发现顶点");
            discover(child, Some(edge));
            stack.push(Frame::new(child));
        }
    }

    /// 广度优先遍历，按出队前的发现顺序回调
    fn breadth_first_walk<'a, F>(&'a self, start: VertexId, mut discover: F)
    where
        F: FnMut(&'a Vertex<K, V>, Option<&'a Edge<K>>),
    {
        let Some(root) = self.slot(start) else {
            return;
        };
        let mut scratch = Scratchpad::new(self.capacity());
        scratch.visit(start);
        discover(root, None);

        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for edge in current.successors() {
                if !scratch.visit(edge.end_id()) {
                    continue;
                }
                if let Some(child) = self.slot(edge.end_id()) {
                    trace!(from = ?edge.start(), to = ?edge.end(), "BFS 发现顶点");
                    discover(child, Some(edge));
                    queue.push_back(child);
                }
            }
        }
    }

    /// 从 start 出发的深度优先遍历顺序；start 不存在时为空
    pub fn depth_first_traversal(&self, start: &K) -> Vec<&Vertex<K, V>> {
        let mut order = Vec::new();
        if let Some(id) = self.id_of(start) {
            self.depth_first_walk(id, |vertex, _| order.push(vertex));
        }
        order
    }

    /// 从 start 出发的广度优先遍历顺序；start 不存在时为空
    pub fn breadth_first_traversal(&self, start: &K) -> Vec<&Vertex<K, V>> {
        let mut order = Vec::new();
        if let Some(id) = self.id_of(start) {
            self.breadth_first_walk(id, |vertex, _| order.push(vertex));
        }
        order
    }

    /// 拓扑排序
    ///
    /// 所有入度为零的顶点作为种子压栈，顶点在其后继全部完成后从结果尾部向前填入。
    /// 遇到仍在栈上的后继（回边）或有顶点无法排入时返回 `Error::CycleDetected`。
    pub fn topological_ordering(&self) -> Result<Vec<&Vertex<K, V>>> {
        let mut scratch = Scratchpad::new(self.capacity());
        let mut on_stack = vec![false; self.capacity()];
        let mut ordered: Vec<Option<&Vertex<K, V>>> = vec![None; self.len()];
        let mut remaining = self.len();

        let mut stack: Vec<&Vertex<K, V>> = Vec::new();
        for vertex in self.vertices().filter(|v| v.in_degree() == 0) {
            scratch.visit(vertex.id());
            on_stack[vertex.id().index()] = true;
            stack.push(vertex);
        }

        while let Some(&top) = stack.last() {
            if let Some(edge) = top.unvisited_successor(&scratch) {
                if let Some(child) = self.slot(edge.end_id()) {
                    scratch.visit(child.id());
                    on_stack[child.id().index()] = true;
                    stack.push(child);
                }
                continue;
            }

            if let Some(back) = top.successors().find(|e| on_stack[e.end_id().index()]) {
                return Err(Error::CycleDetected(format!(
                    "{:?} -> {:?}",
                    back.start(),
                    back.end()
                )));
            }

            on_stack[top.id().index()] = false;
            stack.pop();
            remaining -= 1;
            ordered[remaining] = Some(top);
        }

        if remaining > 0 {
            let stuck = self
                .vertices()
                .find(|v| !scratch.is_visited(v.id()))
                .map(|v| format!("{:?}", v.key()))
                .unwrap_or_default();
            debug!(unplaced = remaining, "拓扑排序失败，存在环");
            return Err(Error::CycleDetected(format!(
                "{} 个顶点位于环上，例如 {}",
                remaining, stuck
            )));
        }

        Ok(ordered.into_iter().flatten().collect())
    }

    /// 深度优先生成图：访问到的顶点副本加上每次发现所经过的有向边
    pub fn depth_first_spanning(&self, start: &K) -> Result<Graph<K, V>>
    where
        V: Clone,
    {
        let id = self.id_of(start).ok_or_else(|| Error::vertex_not_found(start))?;
        let mut span = Graph::new();
        self.depth_first_walk(id, |vertex, via| span.attach(vertex, via));
        debug!(start = ?start, vertices = span.len(), "深度优先生成图");
        Ok(span)
    }

    /// 广度优先生成图
    pub fn breadth_first_spanning(&self, start: &K) -> Result<Graph<K, V>>
    where
        V: Clone,
    {
        let id = self.id_of(start).ok_or_else(|| Error::vertex_not_found(start))?;
        let mut span = Graph::new();
        self.breadth_first_walk(id, |vertex, via| span.attach(vertex, via));
        debug!(start = ?start, vertices = span.len(), "广度优先生成图");
        Ok(span)
    }

    /// 复制顶点，并在给出发现边时复制该边
    fn attach(&mut self, vertex: &Vertex<K, V>, via: Option<&Edge<K>>)
    where
        V: Clone,
    {
        self.add_copy_of(vertex);
        if let Some(edge) = via {
            self.directed_connect_with_weight(edge.start(), edge.end(), edge.weight());
        }
    }
}
