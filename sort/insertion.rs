/// 插入排序（原地、稳定）
///
/// 对每个 i，把 `[0, i)` 中大于 `data[i]` 的元素依次右移一位，再把它放入空位。
pub fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }

        data[j] = key;
    }
}
