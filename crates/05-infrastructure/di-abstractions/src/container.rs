//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::injection::{DynInjectable, Injectable};
use crate::registry::ServiceRegistry;
use crate::resolver::ServiceResolver;
use infrastructure_common::DependencyResult;

/// 依赖注入容器 trait
///
/// 在注册表和解析器之上提供字段注入
pub trait DiContainer: ServiceRegistry + ServiceResolver {
    /// 向注入目标的带限定符字段注入服务
    ///
    /// 目标缺失时返回 `InvalidTarget`。未注册的限定符和不可写字段被跳过，
    /// 类型不符时返回 `TypeMismatch` 并停止处理后续字段。
    fn inject_struct(&self, target: Option<&mut dyn DynInjectable>) -> DependencyResult<()>;

    /// 向类型化目标注入服务
    fn inject<T>(&self, target: &mut T) -> DependencyResult<()>
    where
        T: Injectable,
        Self: Sized,
    {
        self.inject_struct(Some(target as &mut dyn DynInjectable))
    }

    /// 已注册的限定符（排序后）
    fn qualifiers(&self) -> Vec<String>;

    /// 已注册服务数量
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
