use std::io::Write;

use super::{ConsoleError, OutputFormatter};
use crate::config::DisplayConfig;
use crate::search::SearchReport;
use crate::sort::SortReport;

/// 按配置输出查找结果（文本或 JSON）
pub fn write_search_report<W: Write>(
    out: &mut W,
    report: &SearchReport,
    display: &DisplayConfig,
) -> Result<(), ConsoleError> {
    let text = if display.format == "json" {
        OutputFormatter::format_json(report)?
    } else {
        OutputFormatter::format_search_report(report, display.timing)
    };
    writeln!(out, "{}", text)?;
    Ok(())
}

/// 按配置输出排序结果（文本或 JSON）
pub fn write_sort_report<W: Write>(
    out: &mut W,
    report: &SortReport,
    display: &DisplayConfig,
) -> Result<(), ConsoleError> {
    let text = if display.format == "json" {
        OutputFormatter::format_json(report)?
    } else {
        OutputFormatter::format_sort_report(report, display.timing)
    };
    writeln!(out, "{}", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrillConfig;
    use crate::search::{self, SearchAlgorithm};
    use crate::sort::{self, SortAlgorithm};
    use crate::TEST_VECTOR;

    #[test]
    fn test_text_reports() {
        let config = DrillConfig::default();
        let mut out = Vec::new();

        let report = search::run(SearchAlgorithm::Linear, &TEST_VECTOR, 61);
        write_search_report(&mut out, &report, &config.display).unwrap();
        let report = sort::run(SortAlgorithm::Bubble, &TEST_VECTOR);
        write_sort_report(&mut out, &report, &config.display).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The element 61 is at the index 13"));
        assert!(text.contains("The execution time is"));
        assert!(text.contains("The execution time of Bubble Sort is"));
    }

    #[test]
    fn test_json_reports() {
        let mut config = DrillConfig::default();
        config.display.format = "json".to_string();
        let mut out = Vec::new();

        let report = sort::run(SortAlgorithm::Insertion, &[3, 1, 2]);
        write_sort_report(&mut out, &report, &config.display).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["algorithm"], "insertion");
        assert_eq!(value["sorted"], serde_json::json!([1, 2, 3]));
    }
}
