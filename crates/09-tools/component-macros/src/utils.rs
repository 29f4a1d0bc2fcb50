//! 宏工具函数

use syn::{Attribute, Field, Visibility};

/// 查找字段上的指定属性
pub fn find_attribute<'a>(field: &'a Field, attr_name: &str) -> Option<&'a Attribute> {
    field.attrs.iter().find(|attr| attr.path().is_ident(attr_name))
}

/// 检查字段是否为 `pub`
///
/// `pub(crate)` 等受限可见性不算公开。
pub fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}
