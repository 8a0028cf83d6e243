use std::cmp::Ordering;

/// 二分查找（递归版本），要求 `data` 已升序排列
///
/// 中点取 `low + (high - low) / 2`，与经典的递归实现保持一致，
/// 因此存在重复值时返回的下标也完全一致。
pub fn binary_search(data: &[i32], key: i32) -> Option<usize> {
    if data.is_empty() {
        return None;
    }
    binary_search_range(data, 0, data.len() - 1, key)
}

/// 在闭区间 `[low, high]` 内做递归二分查找
///
/// `low > high` 或区间越界时返回 `None`。
pub fn binary_search_range(data: &[i32], low: usize, high: usize, key: i32) -> Option<usize> {
    if low > high || high >= data.len() {
        return None;
    }

    let mid = low + (high - low) / 2;

    match data[mid].cmp(&key) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => {
            // mid 为 0 时左半区间为空
            if mid == 0 {
                None
            } else {
                binary_search_range(data, low, mid - 1, key)
            }
        }
        Ordering::Less => binary_search_range(data, mid + 1, high, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEST_VECTOR;

    fn sorted_vector() -> Vec<i32> {
        let mut data = TEST_VECTOR.to_vec();
        data.sort();
        data
    }

    #[test]
    fn test_binary_search_on_sorted_copy() {
        let data = sorted_vector();
        assert_eq!(binary_search(&data, 61), Some(11));
        assert_eq!(data[11], 61);
        assert_eq!(binary_search(&data, -3), Some(0));
        assert_eq!(binary_search(&data, 89), Some(14));
    }

    #[test]
    fn test_binary_search_not_found() {
        let data = sorted_vector();
        assert_eq!(binary_search(&data, 100), None);
        assert_eq!(binary_search(&data, -50), None);
        assert_eq!(binary_search(&data, 12), None);
        assert_eq!(binary_search(&[], 1), None);
    }

    #[test]
    fn test_binary_search_midpoint_on_duplicates() {
        // 第一次比较就命中 mid = 0 + (3 - 0) / 2 = 1
        assert_eq!(binary_search(&[2, 2, 2, 2], 2), Some(1));
        // mid = 2 命中
        assert_eq!(binary_search(&[1, 2, 2, 2, 3], 2), Some(2));
        // 先走右半区间：mid = 2 (1 < 5)，然后 [3, 5] 中 mid = 4
        assert_eq!(binary_search(&[1, 1, 1, 5, 5, 5], 5), Some(4));
    }

    #[test]
    fn test_binary_search_range_bounds() {
        let data = sorted_vector();
        assert_eq!(binary_search_range(&data, 5, 4, 17), None);
        assert_eq!(binary_search_range(&data, 0, 20, 17), None);
        assert_eq!(binary_search_range(&data, 0, 4, 17), None);
        assert_eq!(binary_search_range(&data, 5, 9, 17), Some(5));
    }
}
