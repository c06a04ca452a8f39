//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod offer_commands;
mod user_commands;
mod voucher_commands;

pub mod handlers;

pub use offer_commands::*;
pub use user_commands::*;
pub use voucher_commands::*;
