//! 最小生成树
//!
//! Prim 从起点逐个吸收最近的顶点；Kruskal 按权重扫描全图边并用并查集去环。
//! 两者都返回新图，`cost()` 为树的总权重。

use super::disjoint_set::DisjointSet;
use super::scratch::Scratchpad;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{OrderedWeight, Weight};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt::Debug;
use tracing::{debug, trace};

impl<K: Ord + Clone + Debug, V: Clone> Graph<K, V> {
    /// Prim 最小生成树
    ///
    /// 队列优先级为顶点最佳连接边的权重，同权重时槽位 ID 小者优先。
    /// 每个顶点加入时从前驱连一条有向边，只覆盖 start 可达的部分。
    pub fn primms(&self, start: &K) -> Result<Graph<K, V>> {
        let source = self.id_of(start).ok_or_else(|| Error::vertex_not_found(start))?;
        let mut scratch = Scratchpad::new(self.capacity());
        let mut queue = PriorityQueue::new();
        let mut tree = Graph::new();
        let mut total: Weight = 0.0;

        scratch.set_distance(source, 0.0);
        queue.push(source, Reverse((OrderedWeight(0.0), source)));

        while let Some((current, _)) = queue.pop() {
            scratch.visit(current);
            let Some(vertex) = self.slot(current) else {
                continue;
            };
            tree.add_copy_of(vertex);

            if let Some(parent) = scratch.predecessor(current).and_then(|id| self.slot(id)) {
                let weight = scratch.distance(current);
                tree.directed_connect_with_weight(parent.key(), vertex.key(), weight);
                total += weight;
                trace!(from = ?parent.key(), to = ?vertex.key(), weight, "Prim 加入顶点");
            }

            for edge in vertex.sort_out_edges_by_weight() {
                let next = edge.end_id();
                if scratch.is_visited(next) || edge.weight() >= scratch.distance(next) {
                    continue;
                }
                scratch.set_distance(next, edge.weight());
                scratch.set_predecessor(next, Some(current));
                queue.push_increase(next, Reverse((OrderedWeight(edge.weight()), next)));
            }
        }

        tree.set_cost(total);
        debug!(start = ?start, vertices = tree.len(), cost = total, "Prim 生成树");
        Ok(tree)
    }

    /// Kruskal 最小生成树（森林）
    ///
    /// 扫描 `edges_by_weight` 的全部边，两端不在同一集合时接受该边，
    /// 在结果中复制两端顶点并建立无向连接。
    pub fn kruskals(&self, start: &K) -> Result<Graph<K, V>> {
        if !self.contains(start) {
            return Err(Error::vertex_not_found(start));
        }

        let mut sets = DisjointSet::new(self.capacity());
        let mut tree = Graph::new();
        let mut total: Weight = 0.0;

        for edge in self.edges_by_weight(start) {
            if !sets.union(edge.start_id().index(), edge.end_id().index()) {
                continue;
            }
            let (Some(from), Some(to)) = (self.slot(edge.start_id()), self.slot(edge.end_id()))
            else {
                continue;
            };
            tree.add_copy_of(from);
            tree.add_copy_of(to);
            tree.connect_with_weight(edge.start(), edge.end(), edge.weight());
            total += edge.weight();
            trace!(start = ?edge.start(), end = ?edge.end(), weight = edge.weight(), "Kruskal 接受边");
        }

        tree.set_cost(total);
        debug!(vertices = tree.len(), cost = total, "Kruskal 生成树");
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_graph() -> Graph<&'static str, usize> {
        let mut g = Graph::new();
        for (i, k) in ["A", "B", "C", "D", "E", "F", "G", "H", "I"].into_iter().enumerate() {
            g.add(k, i);
        }
        for (a, b, w) in [
            ("A", "B", 1.0),
            ("A", "D", 2.0),
            ("B", "E", 3.0),
            ("B", "C", 2.0),
            ("C", "F", 5.0),
            ("D", "E", 3.0),
            ("D", "G", 4.0),
            ("E", "H", 4.0),
            ("E", "F", 1.0),
            ("F", "I", 3.0),
            ("H", "I", 6.0),
            ("G", "H", 1.0),
        ] {
            g.connect_with_weight(&a, &b, w);
        }
        g
    }

    #[test]
    fn test_primms() {
        let g = weighted_graph();
        let tree = g.primms(&"A").unwrap();

        assert_eq!(tree.len(), 9);
        assert_eq!(tree.edge_count(), 8);
        assert_eq!(tree.cost(), 17.0);
        let order: String = tree
            .breadth_first_traversal(&"E")
            .iter()
            .map(|v| *v.key())
            .collect();
        assert_eq!(order, "EFI");
        assert_eq!(tree.get(&"E"), g.get(&"E"));
    }

    #[test]
    fn test_kruskals() {
        let g = weighted_graph();
        let tree = g.kruskals(&"A").unwrap();

        assert_eq!(tree.len(), 9);
        assert_eq!(tree.edge_count(), 16);
        assert_eq!(tree.cost(), 17.0);
        assert!(tree.is_undirected(&"A", &"B"));
        assert!(!tree.has_edge(&"H", &"I"));

        // 同一张图重复计算结果一致
        assert_eq!(g.kruskals(&"E").unwrap().cost(), 17.0);
    }

    #[test]
    fn test_kruskals_forest() {
        let mut g = weighted_graph();
        g.add("X", 9);
        g.add("Y", 10);
        g.connect_with_weight(&"X", &"Y", 0.5);
        g.directed_connect_with_weight(&"X", &"X", 0.1);

        let tree = g.kruskals(&"A").unwrap();
        assert_eq!(tree.len(), 11);
        assert_eq!(tree.cost(), 17.5);
        assert!(!tree.has_edge(&"X", &"X"));
    }

    #[test]
    fn test_primms_reachable_only() {
        let mut g = weighted_graph();
        g.add("X", 9);

        let tree = g.primms(&"A").unwrap();
        assert!(!tree.contains(&"X"));

        let lonely = g.primms(&"X").unwrap();
        assert_eq!(lonely.len(), 1);
        assert_eq!(lonely.cost(), 0.0);
    }

    #[test]
    fn test_spanning_trees_missing_start() {
        let g: Graph<&str, usize> = Graph::new();
        assert!(matches!(g.primms(&"A"), Err(Error::VertexNotFound(_))));
        assert!(matches!(g.kruskals(&"A"), Err(Error::VertexNotFound(_))));
    }
}
