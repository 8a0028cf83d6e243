use clap::Args;

use crate::config::DrillConfig;
use crate::logging::init_logging;

/// 所有练习程序共用的命令行参数
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "dsa.toml")]
    pub config: String,

    /// Write the default configuration to --config and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored output (overrides config file)
    #[arg(long)]
    pub no_color: bool,
}

impl CommonArgs {
    /// 加载配置、应用命令行覆盖、校验并初始化日志和颜色
    ///
    /// 指定了 `--generate-config` 时写出默认配置并返回 `None`，调用方应直接退出。
    pub fn bootstrap(&self) -> crate::Result<Option<DrillConfig>> {
        if self.generate_config {
            let config = DrillConfig::default();
            config.save_to_file(&self.config)?;
            println!("Generated default configuration: {}", self.config);
            return Ok(None);
        }

        let mut config = DrillConfig::from_file(&self.config)?;
        self.apply_overrides(&mut config);
        config.validate()?;

        init_logging(&config.logging)?;
        if !config.display.color {
            colored::control::set_override(false);
        }

        tracing::info!(config = %self.config, "configuration loaded");
        Ok(Some(config))
    }

    /// 命令行参数覆盖配置文件
    pub fn apply_overrides(&self, config: &mut DrillConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["dsa-test"]);
        assert_eq!(cli.common.config, "dsa.toml");
        assert!(!cli.common.generate_config);
        assert!(cli.common.log_level.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::parse_from(["dsa-test", "--log-level", "debug", "--no-color"]);
        let mut config = DrillConfig::default();
        cli.common.apply_overrides(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.display.color);
    }

    #[test]
    fn test_generate_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.toml");
        let cli = TestCli::parse_from(["dsa-test", "--generate-config", "-c", path.to_str().unwrap()]);

        assert!(cli.common.bootstrap().unwrap().is_none());
        let loaded = DrillConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.structures.capacity, 15);
    }
}
