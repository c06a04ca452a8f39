//! Voucher Queries

#[derive(Debug, Clone)]
pub struct GetVoucher {
    pub voucher_id: i64,
}

/// 按兑换码查找（不修改状态）
#[derive(Debug, Clone)]
pub struct GetVoucherByCode {
    pub code: String,
}
