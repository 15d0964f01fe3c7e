//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod index;
mod shared;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use index::KeyIndex;
pub use shared::SharedGraph;
pub use vertex::{Vertex, VertexId};
