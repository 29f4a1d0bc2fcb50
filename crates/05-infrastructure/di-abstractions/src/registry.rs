//! 服务注册表抽象接口

use infrastructure_common::{DependencyResult, TypeInfo};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 类型擦除的服务实例
///
/// 注册表中保存的值。克隆只增加引用计数，底层服务对象始终是注册时的那一个。
#[derive(Clone)]
pub struct ServiceInstance {
    value: Arc<dyn Any + Send + Sync>,
    type_info: TypeInfo,
}

impl ServiceInstance {
    /// 包装一个服务值
    pub fn new<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            value: Arc::new(value),
            type_info: TypeInfo::of::<T>(),
        }
    }

    /// 实例的运行时类型
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// 实例的完整类型名称
    pub fn type_name(&self) -> &'static str {
        self.type_info.name
    }

    /// 实例是否为 `T` 类型
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// 以 `T` 借用实例
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// 以 `T` 取出实例的克隆
    ///
    /// 服务通常注册为 `Arc<dyn Trait>`，克隆得到的仍指向同一个对象。
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// 两个句柄是否指向同一个注册项
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for ServiceInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceInstance")
            .field("type", &self.type_info.short_name())
            .finish()
    }
}

/// 服务注册表 trait
///
/// 以字符串限定符为键保存服务实例。注册表只增不减。
pub trait ServiceRegistry: Send + Sync {
    /// 注册类型擦除的服务实例
    ///
    /// `None` 返回 `InvalidService`，已存在的限定符返回 `DuplicateQualifier`，
    /// 两种情况下注册表都保持不变。
    fn register_instance(
        &self,
        qualifier: &str,
        instance: Option<ServiceInstance>,
    ) -> DependencyResult<()>;

    /// 注册服务
    ///
    /// 注入按类型精确匹配：要注入 `Option<Arc<dyn Trait>>` 字段，服务必须以
    /// `Arc<dyn Trait>` 注册，以 `Arc<Impl>` 注册会在注入时返回 `TypeMismatch`。
    fn register<T>(&self, qualifier: &str, service: T) -> DependencyResult<()>
    where
        T: Send + Sync + 'static,
        Self: Sized,
    {
        self.register_optional(qualifier, Some(service))
    }

    /// 注册可能为空的服务
    fn register_optional<T>(&self, qualifier: &str, service: Option<T>) -> DependencyResult<()>
    where
        T: Send + Sync + 'static,
        Self: Sized,
    {
        self.register_instance(qualifier, service.map(ServiceInstance::new))
    }
}
