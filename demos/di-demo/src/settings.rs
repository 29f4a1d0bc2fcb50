//! 演示应用配置
//!
//! 依次读取配置文件（可选）和 `DI_DEMO_*` 环境变量，后者覆盖前者。

use crate::error::DemoError;
use serde::Deserialize;

/// 默认配置文件路径（不含扩展名）
pub const DEFAULT_CONFIG_PATH: &str = "config/demo";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "DI_DEMO";

/// 演示应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// 运行环境名称，ConfigService 会返回它
    #[serde(default = "default_environment")]
    pub environment: String,
    /// 开发模式：彩色文本日志；否则输出 JSON 日志
    #[serde(default = "default_development")]
    pub development: bool,
    /// 默认日志级别，`RUST_LOG` 优先
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_development() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            development: default_development(),
            log_level: default_log_level(),
        }
    }
}

impl DemoConfig {
    /// 从配置文件和环境变量加载
    ///
    /// 配置文件不存在时使用默认值。
    pub fn load(path: &str) -> Result<Self, DemoError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
