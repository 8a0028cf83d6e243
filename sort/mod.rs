// 排序算法模块
//
// - bubble: 相邻交换的冒泡排序
// - insertion: 右移插入的插入排序
//
// 两者都是原地、稳定的 O(n²) 算法。

pub mod bubble;
pub mod insertion;

use std::time::Instant;

use derive_more::Display;
use serde::Serialize;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;

/// 可选的排序算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[display(fmt = "Bubble Sort")]
    Bubble,
    #[display(fmt = "Insertion Sort")]
    Insertion,
}

impl SortAlgorithm {
    pub fn apply(self, data: &mut [i32]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(data),
            SortAlgorithm::Insertion => insertion_sort(data),
        }
    }
}

/// 一次排序的结果
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub sorted: Vec<i32>,
    pub elapsed_secs: f64,
}

/// 在副本上执行排序并计时
pub fn run(algorithm: SortAlgorithm, data: &[i32]) -> SortReport {
    let mut sorted = data.to_vec();

    let start = Instant::now();
    algorithm.apply(&mut sorted);
    let elapsed_secs = start.elapsed().as_secs_f64();

    tracing::debug!(%algorithm, len = sorted.len(), "sort finished");

    SortReport {
        algorithm,
        sorted,
        elapsed_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEST_VECTOR;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Heap 算法生成全部排列
    fn permutations(items: &mut Vec<i32>, k: usize, out: &mut Vec<Vec<i32>>) {
        if k == 1 {
            out.push(items.clone());
            return;
        }
        permutations(items, k - 1, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            permutations(items, k - 1, out);
        }
    }

    fn is_sorted(data: &[i32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_all_permutations_agree() {
        let mut items = vec![3, -1, 7, 3, 0, 12];
        let mut all = Vec::new();
        let k = items.len();
        permutations(&mut items, k, &mut all);
        assert_eq!(all.len(), 720);

        let mut expected = items.clone();
        expected.sort();

        for perm in all {
            let mut bubble = perm.clone();
            let mut insertion = perm.clone();
            bubble_sort(&mut bubble);
            insertion_sort(&mut insertion);

            assert_eq!(bubble, insertion);
            // 多重集不变
            assert_eq!(bubble, expected);
        }
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for algorithm in [SortAlgorithm::Bubble, SortAlgorithm::Insertion] {
            let once = run(algorithm, &TEST_VECTOR).sorted;
            let twice = run(algorithm, &once).sorted;
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut data: Vec<i32> = (-20..20).collect();
            data.shuffle(&mut rng);

            let report = run(SortAlgorithm::Bubble, &data);
            assert!(is_sorted(&report.sorted));
            assert_eq!(report.sorted, run(SortAlgorithm::Insertion, &data).sorted);
        }
    }

    #[test]
    fn test_run_does_not_touch_input() {
        let data = TEST_VECTOR;
        let report = run(SortAlgorithm::Insertion, &data);
        assert_eq!(data, TEST_VECTOR);
        assert_eq!(report.sorted.len(), data.len());
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(SortAlgorithm::Bubble.to_string(), "Bubble Sort");
        assert_eq!(SortAlgorithm::Insertion.to_string(), "Insertion Sort");
    }
}
