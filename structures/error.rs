use thiserror::Error;

/// 定长容器和链表操作的错误类型
///
/// 所有错误都不会修改容器状态。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// 容器已满时插入
    #[error("overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },

    /// 容器为空时删除
    #[error("underflow: no elements to remove")]
    Underflow,

    /// 链表为空
    #[error("list is empty")]
    Empty,

    /// 链表位置越界（位置从 1 开始）
    #[error("position {position} is out of range for a list of {len} nodes")]
    PositionOutOfRange { position: usize, len: usize },
}
