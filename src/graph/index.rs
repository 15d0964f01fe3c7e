//! 键索引
//!
//! 顶点键到槽位 ID 的映射，并回收被删除顶点的槽位

use crate::graph::vertex::VertexId;
use std::collections::BTreeMap;

/// 键索引
#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    /// 键到槽位 ID 的映射
    key_to_id: BTreeMap<K, VertexId>,
    /// 空闲槽位（后进先出）
    free: Vec<VertexId>,
    /// 已分配过的最大槽位数
    high_water: usize,
}

impl<K: Ord> KeyIndex<K> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            key_to_id: BTreeMap::new(),
            free: Vec::new(),
            high_water: 0,
        }
    }

    /// 通过键查找槽位
    pub fn get(&self, key: &K) -> Option<VertexId> {
        self.key_to_id.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.key_to_id.contains_key(key)
    }

    /// 为新键分配槽位，已存在时返回原槽位
    pub fn allocate(&mut self, key: K) -> VertexId {
        if let Some(id) = self.key_to_id.get(&key) {
            return *id;
        }
        let id = match self.free.pop() {
            Some(id) => id,
            None => {
                let id = VertexId::new(self.high_water);
                self.high_water += 1;
                id
            }
        };
        self.key_to_id.insert(key, id);
        id
    }

    /// 释放键的槽位
    pub fn release(&mut self, key: &K) -> Option<VertexId> {
        let id = self.key_to_id.remove(key)?;
        self.free.push(id);
        Some(id)
    }

    /// 槽位上限（算法暂存区按此大小分配）
    pub fn capacity(&self) -> usize {
        self.high_water
    }

    pub fn len(&self) -> usize {
        self.key_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_to_id.is_empty()
    }

    /// 按键升序遍历 (键, 槽位)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, VertexId)> {
        self.key_to_id.iter().map(|(k, id)| (k, *id))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.key_to_id.keys()
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.key_to_id.values().copied()
    }
}

impl<K: Ord> Default for KeyIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_index() {
        let mut index = KeyIndex::new();
        let a = index.allocate("A");
        let b = index.allocate("B");

        assert_eq!(a, VertexId::new(0));
        assert_eq!(b, VertexId::new(1));
        assert_eq!(index.allocate("A"), a);
        assert_eq!(index.get(&"B"), Some(b));
        assert_eq!(index.len(), 2);
        assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_slot_reuse() {
        let mut index = KeyIndex::new();
        index.allocate(1);
        let two = index.allocate(2);
        index.allocate(3);

        assert_eq!(index.release(&2), Some(two));
        assert_eq!(index.release(&2), None);
        assert!(!index.contains(&2));

        let four = index.allocate(4);
        assert_eq!(four, two);
        assert_eq!(index.capacity(), 3);
        assert_eq!(index.ids().collect::<Vec<_>>().len(), 3);
    }
}
