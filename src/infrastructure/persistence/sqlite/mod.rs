//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod offer_repo;
mod user_repo;
mod voucher_repo;

pub use database::*;
pub use offer_repo::*;
pub use user_repo::*;
pub use voucher_repo::*;
