//! User HTTP Handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    GetUser, GetUserByEmail, ListUsers, RegisterUser, UpdateUser, UserWithVouchers,
};
use crate::infrastructure::http::dto::{ApiResponse, OfferOutput, UserOutput, VoucherOutput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{context_id, ApiJson, USER_ID_HEADER};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserWithVouchers> for UserOutput {
    fn from(found: UserWithVouchers) -> Self {
        let mut output = UserOutput::from(found.user);
        output.vouchers = found
            .vouchers
            .into_iter()
            .map(|active| {
                let mut voucher = VoucherOutput::from(active.voucher);
                voucher.offer = active.offer.map(OfferOutput::from);
                voucher
            })
            .collect();
        output
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 注册用户
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterUserRequest>,
) -> Result<Json<ApiResponse<UserOutput>>, ApiError> {
    let user = state
        .register_user_handler
        .handle(RegisterUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// 按主键或邮箱获取用户
///
/// 数字按主键查询；包含 `@` 的按邮箱查询，并附带未使用的兑换券
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<UserOutput>>, ApiError> {
    if let Ok(user_id) = key.parse::<i64>() {
        let user = state.get_user_handler.handle(GetUser { user_id }).await?;
        return Ok(Json(ApiResponse::success(user.into())));
    }

    if key.contains('@') {
        let found = state
            .get_user_by_email_handler
            .handle(GetUserByEmail { email: key })
            .await?;
        return Ok(Json(ApiResponse::success(found.into())));
    }

    Err(ApiError::BadRequest("user id should be a number".to_string()))
}

/// 列出所有用户
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<UserOutput>>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserOutput::from).collect(),
    )))
}

/// 更新用户，上下文主键来自 `X-User-Id`
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserOutput>>, ApiError> {
    let principal_id = context_id(&headers, USER_ID_HEADER, "Invalid User ID")?;

    let user = state
        .update_user_handler
        .handle(UpdateUser {
            principal_id,
            id: req.id,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(user.into())))
}
