// 基础数据结构模块
//
// - stack: 定长数组栈（整数栈、字符栈）
// - queue: 定长数组队列
// - linked_list: 单向链表
// - error: 容量和空容器错误

pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;

// 重新导出主要类型
pub use error::StructureError;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::{CharStack, IntStack, Stack};
