//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod offer_queries;
mod user_queries;
mod voucher_queries;

pub mod handlers;

pub use offer_queries::*;
pub use user_queries::*;
pub use voucher_queries::*;
