//! 服务解析器抽象接口
//!
//! 按限定符查找已注册的服务，只读。

use crate::registry::ServiceInstance;
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};

/// 服务解析器 trait
pub trait ServiceResolver: Send + Sync {
    /// 解析限定符对应的服务实例，未注册时返回 `NotFound`
    fn resolve(&self, qualifier: &str) -> DependencyResult<ServiceInstance>;

    /// 检查限定符是否已注册
    fn contains(&self, qualifier: &str) -> bool;

    /// 解析并转换为具体类型
    ///
    /// 已注册实例的运行时类型不是 `T` 时返回 `TypeMismatch`。
    fn resolve_as<T>(&self, qualifier: &str) -> DependencyResult<T>
    where
        T: Clone + 'static,
        Self: Sized,
    {
        let instance = self.resolve(qualifier)?;
        instance.downcast::<T>().ok_or_else(|| {
            DependencyError::type_mismatch(
                qualifier,
                TypeInfo::of::<T>().short_name(),
                instance.type_info().short_name(),
            )
        })
    }
}
