//! Domain Layer - 领域层
//!
//! 兑换券限界上下文: 兑换码、有效期与兑换规则。
//! 用户与优惠活动只有 CRUD，没有独立的领域规则，直接以记录形式存在于应用层端口中。

pub mod voucher;
