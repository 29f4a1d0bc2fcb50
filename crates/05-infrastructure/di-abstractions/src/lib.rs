//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义服务注册、解析和字段注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceRegistry`] - 服务注册表接口
//! - [`ServiceResolver`] - 服务解析器接口
//! - [`Injectable`] - 注入目标的字段绑定表
//! - [`DiContainer`] - 依赖注入容器接口

pub mod container;
pub mod injection;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use injection::*;
pub use registry::*;
pub use resolver::*;
