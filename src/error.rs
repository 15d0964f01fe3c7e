//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("检测到环: {0}")]
    CycleDetected(String),

    #[error("无效的权重: {0}")]
    InvalidWeight(String),

    #[error("命令错误: {0}")]
    CommandError(String),
}

impl Error {
    /// 以键的 Debug 形式构造 VertexNotFound
    pub fn vertex_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Error::VertexNotFound(format!("{:?}", key))
    }

    /// 以两端键构造 EdgeNotFound
    pub fn edge_not_found<K: std::fmt::Debug>(start: &K, end: &K) -> Self {
        Error::EdgeNotFound(format!("{:?} -> {:?}", start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::vertex_not_found(&"A");
        assert_eq!(err, Error::VertexNotFound("\"A\"".to_string()));
        assert!(err.to_string().contains("\"A\""));

        let err = Error::edge_not_found(&1, &2);
        assert_eq!(err.to_string(), "边不存在: 1 -> 2");
    }
}
