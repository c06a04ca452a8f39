//! Voucher Context - 兑换券限界上下文
//!
//! 职责:
//! - 兑换码生成
//! - 有效期计算
//! - 兑换判定（归属、是否已用、是否过期）

mod errors;
mod redemption;
mod value_objects;

pub use errors::VoucherError;
pub use redemption::{Redemption, RedemptionOutcome};
pub use value_objects::{
    ExpiryWindow, VoucherCode, CODE_ALPHABET, DEFAULT_CODE_LENGTH, MAX_EXPIRY_YEAR,
};
