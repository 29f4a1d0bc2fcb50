//! # 依赖注入具体实现
//!
//! 提供以限定符为键的线程安全容器，以及基于绑定表的字段注入

use di_abstractions::{DiContainer, DynInjectable, ServiceInstance, ServiceRegistry, ServiceResolver};
use infrastructure_common::{shorten_type_name, DependencyError, DependencyResult};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

pub use di_abstractions::{FieldBinding, InjectSlot, Injectable};

/// 具体的依赖注入容器实现
///
/// 克隆得到的是同一个注册表的句柄。
#[derive(Clone, Default)]
pub struct Container {
    /// 限定符到服务实例的映射
    services: Arc<RwLock<HashMap<String, ServiceInstance>>>,
}

impl Container {
    /// 创建新的容器
    pub fn new() -> Self {
        Self {
            services: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("qualifiers", &self.qualifiers())
            .finish()
    }
}

impl ServiceRegistry for Container {
    fn register_instance(
        &self,
        qualifier: &str,
        instance: Option<ServiceInstance>,
    ) -> DependencyResult<()> {
        let Some(instance) = instance else {
            error!(qualifier, "不能注册空服务");
            return Err(DependencyError::invalid_service(qualifier));
        };

        info!(qualifier, service_type = %instance.type_info(), "注册服务");

        match self.services.write().entry(qualifier.to_string()) {
            Entry::Occupied(_) => {
                error!(qualifier, "服务限定符已注册");
                return Err(DependencyError::duplicate_qualifier(qualifier));
            }
            Entry::Vacant(slot) => {
                slot.insert(instance);
            }
        }

        info!(qualifier, "服务注册成功");
        Ok(())
    }
}

impl ServiceResolver for Container {
    fn resolve(&self, qualifier: &str) -> DependencyResult<ServiceInstance> {
        debug!(qualifier, "解析服务");

        let resolved = self.services.read().get(qualifier).cloned();
        match resolved {
            Some(instance) => {
                debug!(qualifier, service_type = %instance.type_info(), "服务解析成功");
                Ok(instance)
            }
            None => {
                debug!(qualifier, "服务未找到");
                Err(DependencyError::not_found(qualifier))
            }
        }
    }

    fn contains(&self, qualifier: &str) -> bool {
        self.services.read().contains_key(qualifier)
    }
}

impl DiContainer for Container {
    fn inject_struct(&self, target: Option<&mut dyn DynInjectable>) -> DependencyResult<()> {
        let Some(target) = target else {
            error!("注入目标为空");
            return Err(DependencyError::invalid_target("注入目标不能为空"));
        };

        let target_type = target.target_type();
        info!(target = %target_type, "开始结构体注入");

        let mut injected = 0_usize;
        target.visit_fields(&mut |mut field| {
            let Some(qualifier) = field.qualifier else {
                debug!(field = field.name, "字段没有限定符，跳过");
                return Ok(());
            };

            if !field.writable {
                debug!(field = field.name, qualifier, "字段不可写，跳过");
                return Ok(());
            }

            // 依赖是可选的：未注册的限定符保持字段为零值
            let Ok(instance) = self.resolve(qualifier) else {
                debug!(field = field.name, qualifier, "可选服务未注册，跳过字段");
                return Ok(());
            };

            if !field.assign(&instance) {
                let expected = field
                    .service_type
                    .map(|service_type| service_type.short_name())
                    .unwrap_or_else(|| shorten_type_name(field.type_name));
                let actual = instance.type_info().short_name();
                error!(
                    field = field.name,
                    qualifier,
                    expected = %expected,
                    actual = %actual,
                    "注入类型不匹配"
                );
                return Err(DependencyError::type_mismatch(field.name, expected, actual));
            }

            injected += 1;
            info!(field = field.name, qualifier, "字段注入成功");
            Ok(())
        })?;

        info!(target = %target_type, injected, "结构体注入完成");
        Ok(())
    }

    fn qualifiers(&self) -> Vec<String> {
        let mut qualifiers: Vec<String> = self.services.read().keys().cloned().collect();
        qualifiers.sort();
        qualifiers
    }

    fn len(&self) -> usize {
        self.services.read().len()
    }
}
