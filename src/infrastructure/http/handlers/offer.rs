//! Offer HTTP Handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{
    CreateOffer, GenerateVouchers, GenerateVouchersResponse, GetOffer, GetOfferByName,
    UpdateOffer,
};
use crate::infrastructure::http::dto::{ApiResponse, OfferOutput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{context_id, path_id, ApiJson, OFFER_ID_HEADER};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateOfferRequest {
    pub name: String,
    pub discount_percentage: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateOfferRequest {
    pub id: i64,
    pub name: String,
    pub discount_percentage: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateVouchersRequest {
    #[serde(default)]
    pub name: String,
    /// 有效期（天）
    pub expiry_time: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateVouchersOutput {
    pub offer_id: i64,
    pub offer_name: String,
    pub generated: usize,
    pub failed: usize,
}

impl From<GenerateVouchersResponse> for GenerateVouchersOutput {
    fn from(result: GenerateVouchersResponse) -> Self {
        Self {
            offer_id: result.offer_id,
            offer_name: result.offer_name,
            generated: result.generated,
            failed: result.failed,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建优惠活动
pub async fn create_offer(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateOfferRequest>,
) -> Result<Json<ApiResponse<OfferOutput>>, ApiError> {
    let offer = state
        .create_offer_handler
        .handle(CreateOffer {
            name: req.name,
            discount_percentage: req.discount_percentage,
        })
        .await?;

    Ok(Json(ApiResponse::success(offer.into())))
}

/// 按主键获取优惠活动
pub async fn get_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OfferOutput>>, ApiError> {
    let offer_id = path_id(&id, "offer id should be a number")?;
    let offer = state.get_offer_handler.handle(GetOffer { offer_id }).await?;

    Ok(Json(ApiResponse::success(offer.into())))
}

/// 按名称获取优惠活动
pub async fn get_offer_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<OfferOutput>>, ApiError> {
    let offer = state
        .get_offer_by_name_handler
        .handle(GetOfferByName { name })
        .await?;

    Ok(Json(ApiResponse::success(offer.into())))
}

/// 更新优惠活动，上下文主键来自 `X-Offer-Id`
pub async fn update_offer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<UpdateOfferRequest>,
) -> Result<Json<ApiResponse<OfferOutput>>, ApiError> {
    let principal_id = context_id(&headers, OFFER_ID_HEADER, "Invalid Offer ID")?;

    let offer = state
        .update_offer_handler
        .handle(UpdateOffer {
            principal_id,
            id: req.id,
            name: req.name,
            discount_percentage: req.discount_percentage,
        })
        .await?;

    Ok(Json(ApiResponse::success(offer.into())))
}

/// 为所有用户生成该优惠活动的兑换券
pub async fn generate_vouchers(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateVouchersRequest>,
) -> Result<Json<ApiResponse<GenerateVouchersOutput>>, ApiError> {
    let result = state
        .generate_vouchers_handler
        .handle(GenerateVouchers {
            offer_name: req.name,
            expiry_days: req.expiry_time,
        })
        .await?;

    Ok(Json(ApiResponse::success(result.into())))
}
