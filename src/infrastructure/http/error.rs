//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiResponse;
use crate::application::ApplicationError;
use crate::domain::voucher::VoucherError;

/// API 错误
///
/// 每个变体对应一个 HTTP 状态码，响应体为统一信封，`code` 与状态码一致
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    /// 错误消息包含 "not found" 时视为 404，否则 500
    fn from_message(msg: String) -> Self {
        if msg.contains("not found") {
            ApiError::NotFound(msg)
        } else {
            ApiError::Internal(msg)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(code = status.as_u16(), error = %msg, "Bad request");
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!(code = status.as_u16(), error = %msg, "Unauthorized");
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(code = status.as_u16(), error = %msg, "Resource not found");
            }
            ApiError::Internal(msg) => {
                tracing::error!(code = status.as_u16(), error = %msg, "Internal server error");
            }
        }

        let body = ApiResponse::<()>::error(status, self.message());
        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ApplicationError::Voucher(err) => match err {
                VoucherError::NotValidForUser => ApiError::Unauthorized(err.to_string()),
                VoucherError::InvalidCode(_) | VoucherError::ExpiryOutOfRange(_) => {
                    ApiError::BadRequest(err.to_string())
                }
                VoucherError::InvalidVoucher(_)
                | VoucherError::OfferUnavailable(_)
                | VoucherError::InvalidUser(_) => ApiError::from_message(err.to_string()),
            },
            ApplicationError::RepositoryError(msg) => ApiError::from_message(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
