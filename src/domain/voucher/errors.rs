//! Voucher Context - Errors

use thiserror::Error;

/// 兑换券领域错误
///
/// 前三个变体的消息中包含 "not found"，HTTP 层据此映射为 404
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoucherError {
    #[error("Invalid Voucher: voucher not found: {0}")]
    InvalidVoucher(String),

    #[error("Offer Not Available Anymore: offer not found: {0}")]
    OfferUnavailable(i64),

    #[error("Invalid User: user not found: {0}")]
    InvalidUser(i64),

    #[error("Code not valid for this user")]
    NotValidForUser,

    #[error("Invalid voucher code: {0}")]
    InvalidCode(String),

    #[error("Expiry window out of range: {0} days")]
    ExpiryOutOfRange(u32),
}
