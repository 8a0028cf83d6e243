use std::fmt::Display;

use colored::*;
use serde::Serialize;

use crate::numerical::Matrix;
use crate::search::SearchReport;
use crate::sort::SortReport;

pub struct OutputFormatter;

impl OutputFormatter {
    /// 菜单，每项一行
    pub fn format_menu(entries: &[(u32, &str)]) -> String {
        let mut result = String::from("Menu:\n");
        for (key, label) in entries {
            result.push_str(&format!("{}. {}\n", key, label));
        }
        result.trim_end().to_string()
    }

    pub fn format_separator() -> String {
        "-------------------------".to_string()
    }

    /// 溢出、下溢等错误提示
    pub fn format_error(message: &str) -> String {
        message.red().to_string()
    }

    /// 空容器等一般提示
    pub fn format_notice(message: &str) -> String {
        message.yellow().to_string()
    }

    pub fn format_invalid_input(token: &str) -> String {
        format!("Invalid input '{}', please enter a number", token)
            .red()
            .to_string()
    }

    /// 用 `separator` 连接所有值
    pub fn format_values<T: Display>(values: &[T], separator: &str) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// 栈内容，从栈底到栈顶
    pub fn format_stack_contents<T: Display>(values: &[T], separator: &str) -> String {
        format!(
            "{}\n{}\n{}",
            "--------Elements in Stack-------".cyan(),
            Self::format_values(values, separator),
            "------------------------------".cyan()
        )
    }

    pub fn format_search_report(report: &SearchReport, timing: bool) -> String {
        let mut result = match report.index {
            Some(index) => format!("The element {} is at the index {}", report.key, index)
                .green()
                .to_string(),
            None => format!("The element {} is not in the array", report.key)
                .yellow()
                .to_string(),
        };
        if timing {
            result.push_str(&format!(
                "\nThe execution time is {:.6} seconds",
                report.elapsed_secs
            ));
        }
        result
    }

    pub fn format_sort_report(report: &SortReport, timing: bool) -> String {
        let mut result = format!(
            "Sorted array: {}",
            Self::format_values(&report.sorted, " ")
        );
        if timing {
            result.push_str(&format!(
                "\nThe execution time of {} is {:.6} seconds",
                report.algorithm, report.elapsed_secs
            ));
        }
        result
    }

    /// 矩阵按行输出，元素之间用制表符分隔
    pub fn format_matrix(matrix: &Matrix) -> String {
        let mut result = String::new();
        for i in 0..matrix.rows() {
            for value in matrix.row(i) {
                result.push_str(&format!("{}\t", value));
            }
            result.push('\n');
        }
        result.trim_end_matches('\n').to_string()
    }

    /// JSON 格式的报告
    pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{self, SearchAlgorithm};
    use crate::sort::{self, SortAlgorithm};
    use crate::TEST_VECTOR;

    #[test]
    fn test_format_menu() {
        let menu = OutputFormatter::format_menu(&[(1, "Push"), (2, "Pop")]);
        assert_eq!(menu, "Menu:\n1. Push\n2. Pop");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(OutputFormatter::format_values(&[1, -2, 3], " "), "1 -2 3");
        assert_eq!(OutputFormatter::format_values(&['a', 'b'], ""), "ab");
        assert_eq!(OutputFormatter::format_values::<i32>(&[], " "), "");
    }

    #[test]
    fn test_format_search_report() {
        let report = search::run(SearchAlgorithm::Linear, &TEST_VECTOR, 61);
        let result = OutputFormatter::format_search_report(&report, true);
        // 注意：测试时不检查颜色代码，只检查内容
        assert!(result.contains("The element 61 is at the index 13"));
        assert!(result.contains("The execution time is"));

        let report = search::run(SearchAlgorithm::Binary, &TEST_VECTOR, 5);
        let result = OutputFormatter::format_search_report(&report, false);
        assert!(result.contains("The element 5 is not in the array"));
        assert!(!result.contains("execution time"));
    }

    #[test]
    fn test_format_sort_report() {
        let report = sort::run(SortAlgorithm::Insertion, &TEST_VECTOR);
        let result = OutputFormatter::format_sort_report(&report, true);
        assert!(result.starts_with("Sorted array: -3 8 9 10 11 17 23 34 46 57 59 61 71 72 89"));
        assert!(result.contains("The execution time of Insertion Sort is"));
    }

    #[test]
    fn test_format_matrix() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(OutputFormatter::format_matrix(&m), "1\t2\t\n3\t4\t");
    }

    #[test]
    fn test_format_json() {
        let report = search::run(SearchAlgorithm::Linear, &TEST_VECTOR, 61);
        let json = OutputFormatter::format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "linear");
        assert_eq!(value["index"], 13);
        assert_eq!(value["key"], 61);
    }
}
