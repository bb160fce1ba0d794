//! 集合内对象的稳定句柄
//!
//! 点集合与线集合只追加、从不删除，因此按插入顺序分配的下标
//! 在整个会话期间始终有效。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 点句柄（在 `PointCollection` 中的插入序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub(crate) usize);

impl PointId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// 直线句柄（在 `LineCollection` 中的插入序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub(crate) usize);

impl LineId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}
