//! Code Generator Port - 兑换码生成
//!
//! 随机源作为显式依赖注入，不使用全局随机状态

use crate::domain::voucher::VoucherCode;

/// Code Generator Port
pub trait CodeGeneratorPort: Send + Sync {
    /// 生成一个新的兑换码
    fn generate(&self) -> VoucherCode;

    /// 生成的兑换码长度
    fn code_length(&self) -> usize;
}
