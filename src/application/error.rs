//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::DraftStoreError;
use crate::domain::chapter::ChapterError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 业务规则违反
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建业务规则违反错误
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ChapterError> for ApplicationError {
    fn from(err: ChapterError) -> Self {
        match err {
            ChapterError::ChapterNotFound(number) => Self::not_found("Chapter", number),
            ChapterError::LastChapter => Self::business_rule(err.to_string()),
            ChapterError::EmptyContent(_)
            | ChapterError::NothingParsed
            | ChapterError::InvalidStartingNumber
            | ChapterError::StartingNumberTooLarge(_) => Self::validation(err.to_string()),
        }
    }
}

impl From<DraftStoreError> for ApplicationError {
    fn from(err: DraftStoreError) -> Self {
        match err {
            DraftStoreError::NotFound(id) => Self::not_found("Draft batch", id),
            DraftStoreError::AlreadyExists(_) => Self::StorageError(err.to_string()),
        }
    }
}
