//! 结构体检查器
//!
//! 基于 [`Injectable`] 绑定表描述注入目标的字段，不需要运行时反射。

use di_abstractions::Injectable;
use infrastructure_common::shorten_type_name;
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::{debug, info};

/// 注入限定符的标签键
pub const INJECT_TAG: &str = "di";

/// 结构体描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructInfo {
    /// 结构体名称
    pub name: String,
    /// 按声明顺序排列的字段
    pub fields: Vec<FieldInfo>,
}

/// 字段描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// 字段名
    pub name: String,
    /// 字段类型（去掉模块路径）
    pub type_name: String,
    /// 字段标签
    pub tags: BTreeMap<String, String>,
    /// 字段是否公开
    pub exported: bool,
    /// 带限定符字段是否已注入，未标注字段为 `None`
    pub injected: Option<bool>,
}

/// 结构体检查器
#[derive(Debug, Default, Clone, Copy)]
pub struct Inspector;

impl Inspector {
    /// 创建检查器
    pub fn new() -> Self {
        Self
    }

    /// 检查注入目标
    pub fn inspect<T: Injectable>(&self, target: &T) -> StructInfo {
        let name = T::type_info().short_name();
        let bindings = T::bindings();
        info!(struct_name = %name, field_count = bindings.len(), "开始检查结构体");

        let fields = bindings
            .iter()
            .map(|binding| {
                debug!(field = binding.name(), field_type = binding.type_name(), "分析字段");

                let mut tags = BTreeMap::new();
                if let Some(qualifier) = binding.qualifier() {
                    tags.insert(INJECT_TAG.to_string(), qualifier.to_string());
                }

                FieldInfo {
                    name: binding.name().to_string(),
                    type_name: shorten_type_name(binding.type_name()),
                    tags,
                    exported: binding.is_writable(),
                    injected: binding
                        .qualifier()
                        .map(|_| binding.is_filled(target)),
                }
            })
            .collect();

        info!(struct_name = %name, "结构体检查完成");
        StructInfo { name, fields }
    }

    /// 生成可读的检查结果
    pub fn pretty_print(&self, info: &StructInfo) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Struct: {}", info.name);
        output.push_str("Fields:\n");

        for field in &info.fields {
            let _ = writeln!(output, "  - {}:", field.name);
            let _ = writeln!(output, "    Type: {}", field.type_name);
            let _ = writeln!(output, "    Exported: {}", field.exported);

            if !field.tags.is_empty() {
                output.push_str("    Tags:\n");
                for (key, value) in &field.tags {
                    let _ = writeln!(output, "      {key}: {value}");
                }
            }

            if let (true, Some(injected)) = (field.exported, field.injected) {
                let _ = writeln!(output, "    Injected: {injected}");
            }
        }

        output
    }
}
