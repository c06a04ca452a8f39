//! Voucher Commands

/// 创建单张兑换券命令
#[derive(Debug, Clone)]
pub struct CreateVoucher {
    /// 为空时自动生成
    pub code: Option<String>,
    pub user_id: i64,
    pub offer_id: i64,
    /// 有效期（天），为空时使用配置的默认值
    pub expiry_days: Option<u32>,
}

/// 更新兑换券命令
#[derive(Debug, Clone)]
pub struct UpdateVoucher {
    pub principal_id: i64,
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub offer_id: i64,
}

/// 兑换命令
#[derive(Debug, Clone)]
pub struct RedeemVoucher {
    pub code: String,
    pub email: String,
}
