//! spangraph - 带权有向图与生成树算法库
//!
//! 以键索引顶点的内存图，支持：
//! - 有向 / 无向带权连接，出边表与入边表保持镜像
//! - 深度优先、广度优先遍历与拓扑排序
//! - Dijkstra 最短路径
//! - 深度 / 广度优先生成图，Prim 与 Kruskal 最小生成树
//! - 交互式控制台（`spangraph-cli`）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult, ShortestPathTree};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, SharedGraph, Vertex, VertexId};
pub use types::{OrderedWeight, Weight, DEFAULT_WEIGHT, UNREACHED};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
