//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("不能注册空服务: {qualifier}")]
    InvalidService { qualifier: String },

    #[error("服务限定符已注册: {qualifier}")]
    DuplicateQualifier { qualifier: String },

    #[error("未找到服务: {qualifier}")]
    NotFound { qualifier: String },

    #[error("注入目标无效: {message}")]
    InvalidTarget { message: String },

    #[error("类型不匹配: 字段 {field} 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl DependencyError {
    /// 创建空服务错误
    pub fn invalid_service(qualifier: impl Into<String>) -> Self {
        Self::InvalidService {
            qualifier: qualifier.into(),
        }
    }

    /// 创建重复限定符错误
    pub fn duplicate_qualifier(qualifier: impl Into<String>) -> Self {
        Self::DuplicateQualifier {
            qualifier: qualifier.into(),
        }
    }

    /// 创建服务未找到错误
    pub fn not_found(qualifier: impl Into<String>) -> Self {
        Self::NotFound {
            qualifier: qualifier.into(),
        }
    }

    /// 创建注入目标无效错误
    pub fn invalid_target(message: impl Into<String>) -> Self {
        Self::InvalidTarget {
            message: message.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 是否为服务未找到错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
