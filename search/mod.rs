// 查找算法模块
//
// - linear: 顺序扫描，返回第一次出现的下标
// - binary: 递归二分查找，要求输入已升序排列

pub mod binary;
pub mod linear;

use std::time::Instant;

use derive_more::Display;
use serde::Serialize;

use crate::sort::insertion_sort;

pub use binary::{binary_search, binary_search_range};
pub use linear::linear_search;

/// 可选的查找算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    #[display(fmt = "linear")]
    Linear,
    #[display(fmt = "binary")]
    Binary,
}

/// 一次查找的结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub key: i32,
    /// 实际被查找的数组（二分查找时为排序后的副本）
    pub data: Vec<i32>,
    pub index: Option<usize>,
    /// 只统计查找调用本身的耗时
    pub elapsed_secs: f64,
}

/// 执行一次查找并计时
///
/// 二分查找在排好序的副本上进行，原数组保持不变。
pub fn run(algorithm: SearchAlgorithm, data: &[i32], key: i32) -> SearchReport {
    let mut data = data.to_vec();
    if algorithm == SearchAlgorithm::Binary {
        insertion_sort(&mut data);
    }

    let start = Instant::now();
    let index = match algorithm {
        SearchAlgorithm::Linear => linear_search(&data, key),
        SearchAlgorithm::Binary => binary_search(&data, key),
    };
    let elapsed_secs = start.elapsed().as_secs_f64();

    tracing::debug!(%algorithm, key, ?index, "search finished");

    SearchReport {
        algorithm,
        key,
        data,
        index,
        elapsed_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEST_VECTOR;

    #[test]
    fn test_both_algorithms_find_key_in_own_ordering() {
        let linear = run(SearchAlgorithm::Linear, &TEST_VECTOR, 61);
        let binary = run(SearchAlgorithm::Binary, &TEST_VECTOR, 61);

        // 各自数组中的下标都指向 61
        assert_eq!(linear.index, Some(13));
        assert_eq!(linear.data[linear.index.unwrap()], 61);
        assert_eq!(binary.index, Some(11));
        assert_eq!(binary.data[binary.index.unwrap()], 61);
    }

    #[test]
    fn test_both_algorithms_report_absent_key() {
        assert_eq!(run(SearchAlgorithm::Linear, &TEST_VECTOR, 42).index, None);
        assert_eq!(run(SearchAlgorithm::Binary, &TEST_VECTOR, 42).index, None);
    }

    #[test]
    fn test_binary_run_leaves_input_untouched() {
        let data = TEST_VECTOR;
        let report = run(SearchAlgorithm::Binary, &data, 10);
        assert_eq!(data, TEST_VECTOR);
        assert!(report.data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(SearchAlgorithm::Linear.to_string(), "linear");
        assert_eq!(SearchAlgorithm::Binary.to_string(), "binary");
    }
}
