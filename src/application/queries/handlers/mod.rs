//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod offer_handlers;
mod user_handlers;
mod voucher_handlers;

pub use offer_handlers::*;
pub use user_handlers::*;
pub use voucher_handlers::*;
