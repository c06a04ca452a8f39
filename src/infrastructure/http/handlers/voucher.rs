//! Voucher HTTP Handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    CreateVoucher, GetVoucher, GetVoucherByCode, RedeemVoucher, UpdateVoucher,
};
use crate::infrastructure::http::dto::{ApiResponse, VoucherOutput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{context_id, path_id, ApiJson, VOUCHER_ID_HEADER};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateVoucherRequest {
    /// 为空时自动生成
    #[serde(default)]
    pub code: Option<String>,
    pub user_id: i64,
    pub offer_id: i64,
    /// 有效期（天），缺省时使用配置值
    #[serde(default)]
    pub expiry_time: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateVoucherRequest {
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub offer_id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RedeemVoucherRequest {
    pub code: String,
    pub email: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建单张兑换券
pub async fn create_voucher(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateVoucherRequest>,
) -> Result<Json<ApiResponse<VoucherOutput>>, ApiError> {
    let voucher = state
        .create_voucher_handler
        .handle(CreateVoucher {
            code: req.code,
            user_id: req.user_id,
            offer_id: req.offer_id,
            expiry_days: req.expiry_time,
        })
        .await?;

    Ok(Json(ApiResponse::success(voucher.into())))
}

/// 按主键获取兑换券
pub async fn get_voucher(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VoucherOutput>>, ApiError> {
    let voucher_id = path_id(&id, "voucher id should be a number")?;
    let voucher = state
        .get_voucher_handler
        .handle(GetVoucher { voucher_id })
        .await?;

    Ok(Json(ApiResponse::success(voucher.into())))
}

/// 按兑换码获取兑换券（不修改状态）
pub async fn get_voucher_by_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<VoucherOutput>>, ApiError> {
    let voucher = state
        .get_voucher_by_code_handler
        .handle(GetVoucherByCode { code })
        .await?;

    Ok(Json(ApiResponse::success(voucher.into())))
}

/// 更新兑换券，上下文主键来自 `X-Voucher-Id`
pub async fn update_voucher(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<UpdateVoucherRequest>,
) -> Result<Json<ApiResponse<VoucherOutput>>, ApiError> {
    let principal_id = context_id(&headers, VOUCHER_ID_HEADER, "Invalid Voucher ID")?;

    let voucher = state
        .update_voucher_handler
        .handle(UpdateVoucher {
            principal_id,
            id: req.id,
            code: req.code,
            user_id: req.user_id,
            offer_id: req.offer_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(voucher.into())))
}

/// 兑换
///
/// 已使用或已过期仍返回 200，仅 msg 不同且 data 为 null
pub async fn redeem_voucher(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RedeemVoucherRequest>,
) -> Result<Json<ApiResponse<VoucherOutput>>, ApiError> {
    let result = state
        .redeem_voucher_handler
        .handle(RedeemVoucher {
            code: req.code,
            email: req.email,
        })
        .await?;

    if !result.outcome.is_redeemed() {
        return Ok(Json(ApiResponse::message(result.outcome.message())));
    }

    let mut output = VoucherOutput::from(result.voucher);
    output.discount_percentage = Some(result.discount_percentage);

    Ok(Json(ApiResponse::success(output)))
}
