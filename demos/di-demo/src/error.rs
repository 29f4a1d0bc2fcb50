//! 演示应用错误类型

use infrastructure_common::DependencyError;
use thiserror::Error;

/// 演示应用错误
#[derive(Error, Debug)]
pub enum DemoError {
    /// 配置加载失败
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    /// 日志初始化失败
    #[error("日志初始化失败: {message}")]
    Logging { message: String },

    /// 容器操作失败
    #[error("依赖注入失败: {0}")]
    Dependency(#[from] DependencyError),
}
