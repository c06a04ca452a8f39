//! Voucher Context - Value Objects

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::VoucherError;

/// 兑换码字符集
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// 默认兑换码长度
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// 兑换码
///
/// 不变量: 非空，且不含首尾空白
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoucherCode(String);

impl VoucherCode {
    /// 使用调用方提供的兑换码
    pub fn new(code: impl Into<String>) -> Result<Self, VoucherError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(VoucherError::InvalidCode("code cannot be empty".to_string()));
        }
        if trimmed.len() != code.len() {
            return Err(VoucherError::InvalidCode(
                "code cannot start or end with whitespace".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// 由外部传入的随机数生成器生成定长兑换码
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        let code = (0..length)
            .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VoucherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 过期时间允许的最大年份，超过后 RFC3339 文本无法回读
pub const MAX_EXPIRY_YEAR: i32 = 9999;

/// 有效期窗口（天）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWindow {
    days: u32,
}

impl ExpiryWindow {
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// 过期时间 = 签发时间 + 天数 × 24 小时
    ///
    /// 结果不得晚于 `MAX_EXPIRY_YEAR` 年末
    pub fn expire_time_from(&self, issued_at: DateTime<Utc>) -> Result<DateTime<Utc>, VoucherError> {
        let window = Duration::try_hours(i64::from(self.days) * 24)
            .ok_or(VoucherError::ExpiryOutOfRange(self.days))?;
        issued_at
            .checked_add_signed(window)
            .filter(|expire_time| expire_time.year() <= MAX_EXPIRY_YEAR)
            .ok_or(VoucherError::ExpiryOutOfRange(self.days))
    }
}
