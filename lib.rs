pub mod config;
pub mod console;
pub mod logging;
pub mod numerical;
pub mod search;
pub mod sort;
pub mod structures;

use std::error::Error;

// 重新导出主要的公共接口
pub use numerical::{Matrix, MatrixError};
pub use structures::{CharStack, IntStack, LinkedList, Queue, Stack, StructureError};

// 重新导出常用类型，便于二进制文件使用
pub use crate::config::DrillConfig;
pub use console::{InputReader, OutputFormatter};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// 所有练习共用的固定测试数据
pub const TEST_VECTOR: [i32; 15] = [10, 23, 9, 71, -3, 89, 46, 34, 59, 17, 11, 8, 72, 61, 57];

/// 栈、队列和矩阵的默认容量
pub const DEFAULT_CAPACITY: usize = 15;
