use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{DEFAULT_CAPACITY, TEST_VECTOR};

/// 练习程序的配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// 栈和队列配置
    pub structures: StructuresConfig,

    /// 查找配置
    pub search: SearchConfig,

    /// 矩阵配置
    pub matrix: MatrixConfig,

    /// 输出配置
    pub display: DisplayConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 栈和队列配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuresConfig {
    /// 定长缓冲区容量
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// 查找配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 默认查找的值
    #[serde(default = "default_key")]
    pub key: i32,

    /// 查找和排序使用的数组
    #[serde(default = "default_data")]
    pub data: Vec<i32>,
}

/// 矩阵配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// 行数和列数的上限
    #[serde(default = "default_max_dim")]
    pub max_dim: usize,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 是否输出彩色文字
    #[serde(default = "default_color")]
    pub color: bool,

    /// 是否输出执行时间
    #[serde(default = "default_timing")]
    pub timing: bool,

    /// 报告格式：text, json
    #[serde(default = "default_format")]
    pub format: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stderr, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_key() -> i32 {
    61
}

fn default_data() -> Vec<i32> {
    TEST_VECTOR.to_vec()
}

fn default_max_dim() -> usize {
    DEFAULT_CAPACITY
}

fn default_color() -> bool {
    true
}

fn default_timing() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_output() -> String {
    "stderr".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            structures: StructuresConfig {
                capacity: default_capacity(),
            },
            search: SearchConfig {
                key: default_key(),
                data: default_data(),
            },
            matrix: MatrixConfig {
                max_dim: default_max_dim(),
            },
            display: DisplayConfig {
                color: default_color(),
                timing: default_timing(),
                format: default_format(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl DrillConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（DSA__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use dsa_drills::config::DrillConfig;
    ///
    /// // 文件不存在时使用默认配置
    /// let config = DrillConfig::from_file("dsa.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("DSA").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查容量、矩阵维度上限、输出格式、日志级别和日志文件。
    pub fn validate(&self) -> Result<(), String> {
        if self.structures.capacity == 0 {
            return Err("Structure capacity must be greater than 0".to_string());
        }

        if self.matrix.max_dim == 0 {
            return Err("Matrix max_dim must be greater than 0".to_string());
        }

        match self.display.format.as_str() {
            "text" | "json" => {}
            _ => {
                return Err(format!(
                    "Invalid display format: '{}'. Must be one of: text, json",
                    self.display.format
                ))
            }
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        match self.logging.output.as_str() {
            "stderr" => {}
            "file" => {
                if self.logging.log_file.is_none() {
                    return Err(
                        "Log output is 'file' but log_file path is not specified".to_string()
                    );
                }
            }
            _ => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stderr, file",
                    self.logging.output
                ))
            }
        }

        Ok(())
    }

    /// 是否以 JSON 输出报告
    pub fn json_output(&self) -> bool {
        self.display.format == "json"
    }
}
