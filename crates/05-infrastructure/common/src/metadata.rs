//! 元数据定义
//!
//! 提供服务和注入目标的类型信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型是否为 `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// 获取简短的类型名称（去掉各段的模块路径）
    ///
    /// `alloc::sync::Arc<dyn demo::UserService>` 会变成 `Arc<dyn UserService>`。
    pub fn short_name(&self) -> String {
        shorten_type_name(self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// 去掉类型名称中每个路径的模块前缀
pub fn shorten_type_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut segment = String::new();

    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            result.push_str(segment.rsplit("::").next().unwrap_or(&segment));
            segment.clear();
            result.push(ch);
        }
    }
    result.push_str(segment.rsplit("::").next().unwrap_or(&segment));

    result
}
