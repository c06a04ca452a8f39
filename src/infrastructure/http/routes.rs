//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                        GET   健康检查
//! - /api/register                    POST  注册用户
//! - /api/user/:key                   GET   按主键或邮箱获取用户
//! - /api/user/update                 PUT   更新用户（X-User-Id）
//! - /api/list_users                  GET   列出所有用户
//! - /api/offer/create                POST  创建优惠活动
//! - /api/offer/:id                   GET   获取优惠活动
//! - /api/offer/name/:name            GET   按名称获取优惠活动
//! - /api/offer/update                POST  更新优惠活动（X-Offer-Id）
//! - /api/offer/generate_vouchers     POST  为所有用户生成兑换券
//! - /api/voucher/create              POST  创建兑换券
//! - /api/voucher/:id                 GET   获取兑换券
//! - /api/voucher/code/:code          GET   按兑换码获取兑换券
//! - /api/voucher/update              POST  更新兑换券（X-Voucher-Id）
//! - /api/voucher/redeem              POST  兑换

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/register", post(handlers::register_user))
        .route("/list_users", get(handlers::list_users))
        .nest("/user", user_routes())
        .nest("/offer", offer_routes())
        .nest("/voucher", voucher_routes())
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/update", put(handlers::update_user))
        .route("/:key", get(handlers::get_user))
}

/// Offer 路由
fn offer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_offer))
        .route("/update", post(handlers::update_offer))
        .route("/generate_vouchers", post(handlers::generate_vouchers))
        .route("/name/:name", get(handlers::get_offer_by_name))
        .route("/:id", get(handlers::get_offer))
}

/// Voucher 路由
fn voucher_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_voucher))
        .route("/update", post(handlers::update_voucher))
        .route("/redeem", post(handlers::redeem_voucher))
        .route("/code/:code", get(handlers::get_voucher_by_code))
        .route("/:id", get(handlers::get_voucher))
}
