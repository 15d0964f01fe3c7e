//! 图算法模块
//!
//! 遍历、拓扑排序、Dijkstra 最短路径以及 Prim / Kruskal 最小生成树。
//! 算法以 `Graph` 方法的形式提供，状态保存在每次调用独立的暂存区中。

mod disjoint_set;
mod scratch;
mod shortest_path;
mod spanning;
mod traversal;

pub use disjoint_set::DisjointSet;
pub use scratch::Scratchpad;
pub use shortest_path::{PathFinder, PathResult, ShortestPathTree};
