//! Request Extractors
//!
//! JSON 请求体与上下文主键的解析，失败统一转换为 400 信封

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::HeaderMap,
    Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// 当前用户主键
pub const USER_ID_HEADER: &str = "X-User-Id";
/// 当前优惠活动主键
pub const OFFER_ID_HEADER: &str = "X-Offer-Id";
/// 当前兑换券主键
pub const VOUCHER_ID_HEADER: &str = "X-Voucher-Id";

/// 包装 `Json<T>`，解析失败时返回信封格式的 400 而不是 axum 默认的纯文本
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// 从请求头读取上下文主键
///
/// 缺失、非数字或为 0 时返回 400，消息由调用方给出
pub fn context_id(headers: &HeaderMap, header: &str, invalid_msg: &str) -> Result<i64, ApiError> {
    let Some(value) = headers.get(header) else {
        return Err(ApiError::BadRequest(invalid_msg.to_string()));
    };

    value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|id| *id != 0)
        .ok_or_else(|| ApiError::BadRequest(invalid_msg.to_string()))
}

/// 解析路径中的数字主键
pub fn path_id(raw: &str, invalid_msg: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(invalid_msg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_context_id() {
        let mut headers = HeaderMap::new();
        assert!(context_id(&headers, USER_ID_HEADER, "Invalid User ID").is_err());

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("abc"));
        assert!(context_id(&headers, USER_ID_HEADER, "Invalid User ID").is_err());

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("0"));
        assert!(context_id(&headers, USER_ID_HEADER, "Invalid User ID").is_err());

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("42"));
        assert_eq!(context_id(&headers, USER_ID_HEADER, "Invalid User ID").unwrap(), 42);
    }

    #[test]
    fn test_path_id() {
        assert_eq!(path_id("7", "voucher id should be a number").unwrap(), 7);

        match path_id("seven", "voucher id should be a number") {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "voucher id should be a number"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
