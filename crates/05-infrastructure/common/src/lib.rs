//! # Infrastructure Common
//!
//! 依赖注入容器各 crate 共享的错误类型和元数据。
//!
//! ## 核心类型
//!
//! - [`DependencyError`] - 注册、解析和注入失败的统一错误
//! - [`TypeInfo`] - 服务和注入目标的运行时类型信息

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
