//! 不相交集合（并查集）
//!
//! Kruskal 算法用它判断一条边的两端是否已经在同一棵子树中。
//! 路径压缩加按秩合并，均摊操作近似常数时间。

/// 按槽位下标组织的并查集
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// 父节点
    parent: Vec<usize>,
    /// 秩（树高上界）
    rank: Vec<u32>,
}

impl DisjointSet {
    /// 创建 n 个单元素集合，每个元素是自己的代表
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// 追加一个单元素集合，返回其下标
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// 查找代表元素，同时压缩路径
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = id;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// 合并两个集合，原本不在同一集合时返回 true
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_a] = root_b;
            if self.rank[root_a] == self.rank[root_b] {
                self.rank[root_b] += 1;
            }
        }
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut sets = DisjointSet::new(6);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.same_set(0, 1));
        assert!(!sets.same_set(1, 2));

        assert!(sets.union(1, 3));
        assert!(sets.same_set(0, 2));
        assert!(!sets.same_set(4, 5));
        assert_eq!(sets.len(), 6);
    }

    #[test]
    fn test_union_by_rank() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1);
        // 秩相同时 0 挂到 1 下，1 的秩加一
        assert_eq!(sets.find(0), 1);

        sets.union(2, 1);
        assert_eq!(sets.find(2), 1);
        assert_eq!(sets.rank[1], 1);
    }

    #[test]
    fn test_path_compression() {
        let mut sets = DisjointSet::new(5);
        for i in 0..4 {
            sets.parent[i] = i + 1;
        }

        assert_eq!(sets.find(0), 4);
        assert!(sets.parent[..4].iter().all(|&p| p == 4));

        let extra = sets.make_set();
        assert_eq!(extra, 5);
        assert_eq!(sets.find(extra), extra);
    }
}
