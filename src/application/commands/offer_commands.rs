//! Offer Commands

/// 创建优惠活动命令
#[derive(Debug, Clone)]
pub struct CreateOffer {
    pub name: String,
    pub discount_percentage: u32,
}

/// 更新优惠活动命令
#[derive(Debug, Clone)]
pub struct UpdateOffer {
    pub principal_id: i64,
    pub id: i64,
    pub name: String,
    pub discount_percentage: u32,
}

/// 为所有用户批量生成兑换券命令
#[derive(Debug, Clone)]
pub struct GenerateVouchers {
    pub offer_name: String,
    /// 有效期（天）
    pub expiry_days: u32,
}
