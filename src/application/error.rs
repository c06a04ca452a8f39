//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::voucher::VoucherError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误（缺少必填参数等），消息原样返回给客户端
    #[error("{0}")]
    ValidationError(String),

    /// 上下文中的主键与请求中的主键不一致
    #[error("{0}")]
    Unauthorized(String),

    /// 兑换券领域规则
    #[error(transparent)]
    Voucher(#[from] VoucherError),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

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

    /// 创建未授权错误
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".to_string())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

/// 主键必须非零
pub(crate) fn require_id(id: i64) -> Result<(), ApplicationError> {
    if id == 0 {
        return Err(ApplicationError::validation("id param is required"));
    }
    Ok(())
}

/// 字符串参数必须非空
pub(crate) fn require_non_empty(value: &str, message: &'static str) -> Result<(), ApplicationError> {
    if value.is_empty() {
        return Err(ApplicationError::validation(message));
    }
    Ok(())
}
