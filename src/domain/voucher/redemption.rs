//! Voucher Context - 兑换判定
//!
//! 判定顺序固定：归属 → 是否已用 → 是否过期。
//! "已用" 与 "过期" 不是错误，而是成功状态下的提示结果。

use chrono::{DateTime, Utc};

use super::VoucherError;

/// 兑换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// 兑换成功，需要持久化 used_at
    Redeemed { used_at: DateTime<Utc> },
    /// 已被使用，不做修改
    AlreadyUsed,
    /// 已过期，不做修改
    Expired,
}

impl RedemptionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RedemptionOutcome::Redeemed { .. } => "ok",
            RedemptionOutcome::AlreadyUsed => "Used Voucher",
            RedemptionOutcome::Expired => "Expired Voucher",
        }
    }

    pub fn is_redeemed(&self) -> bool {
        matches!(self, RedemptionOutcome::Redeemed { .. })
    }
}

/// 一次兑换请求所需的兑换券状态
#[derive(Debug, Clone, Copy)]
pub struct Redemption<'a> {
    pub owner_email: &'a str,
    pub is_used: bool,
    pub expire_time: DateTime<Utc>,
}

impl Redemption<'_> {
    /// 判定兑换结果
    ///
    /// 邮箱不匹配返回错误；`now` 严格晚于 `expire_time` 才算过期
    pub fn decide(
        &self,
        redeemer_email: &str,
        now: DateTime<Utc>,
    ) -> Result<RedemptionOutcome, VoucherError> {
        if redeemer_email != self.owner_email {
            return Err(VoucherError::NotValidForUser);
        }

        if self.is_used {
            return Ok(RedemptionOutcome::AlreadyUsed);
        }

        if now > self.expire_time {
            return Ok(RedemptionOutcome::Expired);
        }

        Ok(RedemptionOutcome::Redeemed { used_at: now })
    }
}
