/// 线性查找：按下标顺序扫描，返回第一个匹配元素的下标
///
/// 存在重复值时总是返回第一次出现的位置。
pub fn linear_search(data: &[i32], key: i32) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        if value == key {
            return Some(i);
        }
    }
    None
}
