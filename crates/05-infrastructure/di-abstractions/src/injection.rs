//! 字段注入抽象接口
//!
//! 注入目标不依赖运行时反射，而是提供一张绑定表：每个字段一条
//! [`FieldBinding`]，记录字段名、声明类型、限定符以及类型化的访问器。
//! 绑定表通常由 `#[derive(Injectable)]` 生成，也可以手写。

use crate::registry::ServiceInstance;
use infrastructure_common::{DependencyResult, TypeInfo};
use std::fmt;

/// 可注入的字段槽位
///
/// 槽位的零值表示“未注入”，[`InjectSlot::fill`] 写入解析到的服务。
pub trait InjectSlot {
    /// 槽位接受的服务类型
    type Service: Clone + Send + Sync + 'static;

    /// 写入服务
    fn fill(&mut self, service: Self::Service);

    /// 槽位是否已有值
    fn is_filled(&self) -> bool;
}

impl<S> InjectSlot for Option<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Service = S;

    fn fill(&mut self, service: S) {
        *self = Some(service);
    }

    fn is_filled(&self) -> bool {
        self.is_some()
    }
}

type AssignFn<T> = Box<dyn Fn(&mut T, &ServiceInstance) -> bool + Send + Sync>;
type ProbeFn<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// 字段绑定
///
/// 描述注入目标 `T` 的一个字段。没有限定符的绑定只用于展示，注入时被跳过。
pub struct FieldBinding<T> {
    name: &'static str,
    type_name: &'static str,
    qualifier: Option<&'static str>,
    writable: bool,
    service_type: Option<TypeInfo>,
    assign: Option<AssignFn<T>>,
    probe: Option<ProbeFn<T>>,
}

impl<T: 'static> FieldBinding<T> {
    /// 创建带限定符的字段绑定
    ///
    /// `get` 和 `get_mut` 访问目标上的槽位字段。槽位只接受类型恰好为
    /// `S::Service` 的实例：`Option<Arc<dyn Trait>>` 字段要求服务以
    /// `Arc<dyn Trait>` 注册。
    pub fn new<S, G, M>(name: &'static str, qualifier: &'static str, get: G, get_mut: M) -> Self
    where
        S: InjectSlot + 'static,
        G: Fn(&T) -> &S + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut S + Send + Sync + 'static,
    {
        let assign = move |target: &mut T, instance: &ServiceInstance| {
            match instance.downcast::<S::Service>() {
                Some(service) => {
                    get_mut(target).fill(service);
                    true
                }
                None => false,
            }
        };
        let probe = move |target: &T| get(target).is_filled();

        Self {
            name,
            type_name: std::any::type_name::<S>(),
            qualifier: Some(qualifier),
            writable: true,
            service_type: Some(TypeInfo::of::<S::Service>()),
            assign: Some(Box::new(assign)),
            probe: Some(Box::new(probe)),
        }
    }

    /// 创建不参与注入的字段描述
    pub fn untagged(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            qualifier: None,
            writable: true,
            service_type: None,
            assign: None,
            probe: None,
        }
    }

    /// 标记为不可写（非公开字段）
    pub fn restricted(mut self) -> Self {
        self.writable = false;
        self
    }

    /// 字段名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 字段声明类型名称
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 字段限定符
    pub fn qualifier(&self) -> Option<&'static str> {
        self.qualifier
    }

    /// 字段是否可写
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// 槽位接受的服务类型
    pub fn service_type(&self) -> Option<TypeInfo> {
        self.service_type
    }

    /// 将实例写入目标字段，类型不符时返回 `false` 且不修改字段
    pub fn assign(&self, target: &mut T, instance: &ServiceInstance) -> bool {
        match &self.assign {
            Some(assign) => assign(target, instance),
            None => false,
        }
    }

    /// 目标字段当前是否已注入
    pub fn is_filled(&self, target: &T) -> bool {
        self.probe.as_ref().is_some_and(|probe| probe(target))
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("qualifier", &self.qualifier)
            .field("writable", &self.writable)
            .finish()
    }
}

/// 可注入目标 trait
///
/// 绑定表按字段声明顺序返回。
pub trait Injectable: Sized + 'static {
    /// 字段绑定表
    fn bindings() -> Vec<FieldBinding<Self>>;

    /// 目标类型信息
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
    }
}

/// 注入过程中对单个字段的视图
pub struct FieldRef<'a> {
    /// 字段名
    pub name: &'static str,
    /// 字段声明类型名称
    pub type_name: &'static str,
    /// 字段限定符
    pub qualifier: Option<&'static str>,
    /// 字段是否可写
    pub writable: bool,
    /// 槽位接受的服务类型
    pub service_type: Option<TypeInfo>,
    assign: &'a mut dyn FnMut(&ServiceInstance) -> bool,
}

impl FieldRef<'_> {
    /// 将实例写入字段，类型不符时返回 `false`
    pub fn assign(&mut self, instance: &ServiceInstance) -> bool {
        (self.assign)(instance)
    }
}

/// [`Injectable`] 的对象安全形式
///
/// 容器通过它逐字段访问任意注入目标。所有 [`Injectable`] 类型自动实现。
pub trait DynInjectable {
    /// 目标类型信息
    fn target_type(&self) -> TypeInfo;

    /// 按声明顺序访问每个字段，访问者返回错误时立即停止
    fn visit_fields(
        &mut self,
        visitor: &mut dyn FnMut(FieldRef<'_>) -> DependencyResult<()>,
    ) -> DependencyResult<()>;
}

impl<T: Injectable> DynInjectable for T {
    fn target_type(&self) -> TypeInfo {
        T::type_info()
    }

    fn visit_fields(
        &mut self,
        visitor: &mut dyn FnMut(FieldRef<'_>) -> DependencyResult<()>,
    ) -> DependencyResult<()> {
        for binding in T::bindings() {
            let mut assign = |instance: &ServiceInstance| binding.assign(self, instance);
            visitor(FieldRef {
                name: binding.name(),
                type_name: binding.type_name(),
                qualifier: binding.qualifier(),
                writable: binding.is_writable(),
                service_type: binding.service_type(),
                assign: &mut assign,
            })?;
        }
        Ok(())
    }
}
