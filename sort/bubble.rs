/// 冒泡排序（原地、稳定）
///
/// 外层循环固定执行 n-1 轮，没有"本轮无交换则提前结束"的优化，
/// 已排序的输入同样需要 O(n²) 次比较。
pub fn bubble_sort(data: &mut [i32]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}
