//! Data Transfer Objects

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::{OfferRecord, UserRecord, VoucherRecord};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
///
/// `code` 与 HTTP 状态码一致
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// 成功但只有消息，data 为 null
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            msg: msg.into(),
            data: None,
        }
    }

    /// 错误响应
    pub fn error(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Output DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct OfferOutput {
    pub id: i64,
    pub name: String,
    pub discount_percentage: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OfferRecord> for OfferOutput {
    fn from(offer: OfferRecord) -> Self {
        Self {
            id: offer.id,
            name: offer.name,
            discount_percentage: offer.discount_percentage,
            created_at: offer.created_at.to_rfc3339(),
            updated_at: offer.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoucherOutput {
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub offer_id: i64,
    pub is_used: bool,
    pub used_at: Option<String>,
    pub expire_time: String,
    /// 仅在兑换成功时返回
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub discount_percentage: Option<u32>,
    /// 仅在按邮箱查询用户时返回
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offer: Option<OfferOutput>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<VoucherRecord> for VoucherOutput {
    fn from(voucher: VoucherRecord) -> Self {
        Self {
            id: voucher.id,
            code: voucher.code,
            user_id: voucher.user_id,
            offer_id: voucher.offer_id,
            is_used: voucher.is_used,
            used_at: voucher.used_at.map(|t| t.to_rfc3339()),
            expire_time: voucher.expire_time.to_rfc3339(),
            discount_percentage: None,
            offer: None,
            created_at: voucher.created_at.to_rfc3339(),
            updated_at: voucher.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub vouchers: Vec<VoucherOutput>,
}

impl From<UserRecord> for UserOutput {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            vouchers: Vec::new(),
        }
    }
}
