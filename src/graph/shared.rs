//! 共享图
//!
//! 图本身不做任何同步。需要在多个线程之间共享同一张图时，
//! 用读写锁包装，保证同一时刻只有一个修改在进行。

use super::graph::Graph;
use parking_lot::RwLock;
use std::sync::Arc;

/// 读写锁包装的图句柄，克隆后指向同一张图
pub struct SharedGraph<K, V> {
    inner: Arc<RwLock<Graph<K, V>>>,
}

impl<K, V> SharedGraph<K, V> {
    /// 包装已有的图
    pub fn new(graph: Graph<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 在读锁下执行查询或算法
    pub fn read<R>(&self, f: impl FnOnce(&Graph<K, V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// 在写锁下执行修改
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph<K, V>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// 取回内部的图；仍有其他句柄时返回自身
    pub fn try_unwrap(self) -> Result<Graph<K, V>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<K, V> Clone for SharedGraph<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord, V> Default for SharedGraph<K, V> {
    fn default() -> Self {
        Self::new(Graph::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_graph_serializes_writers() {
        let shared: SharedGraph<u32, ()> = SharedGraph::default();
        shared.write(|g| {
            for k in 0..8 {
                g.add(k, ());
            }
        });

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for k in 0..8 {
                        shared.write(|g| g.directed_connect_with_weight(&t, &k, f64::from(k)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.read(|g| g.edge_count()), 32);
        assert_eq!(shared.read(|g| g.out_edge_weight(&3, &7)), Some(7.0));

        let graph = shared.try_unwrap().ok().unwrap();
        assert_eq!(graph.in_degree(&0), Some(4));
    }
}
