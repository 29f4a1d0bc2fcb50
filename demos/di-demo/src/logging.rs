//! 日志初始化

use crate::settings::DemoConfig;
use crate::error::DemoError;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅者
///
/// 开发模式输出带颜色的文本日志，包含文件和行号；其他模式输出 JSON。
/// 设置了 `RUST_LOG` 时以它为准。
pub fn init(config: &DemoConfig) -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| DemoError::Logging {
            message: format!("无效的日志级别 {}: {}", config.log_level, e),
        })?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.development)
        .with_target(!config.development)
        .with_file(config.development)
        .with_line_number(config.development);

    if config.development {
        subscriber.try_init()
    } else {
        subscriber.json().try_init()
    }
    .map_err(|e| DemoError::Logging {
        message: e.to_string(),
    })?;

    info!(
        environment = %config.environment,
        development = config.development,
        "日志系统初始化完成"
    );
    Ok(())
}
