//! HTTP Handlers

mod offer;
mod ping;
mod user;
mod voucher;

pub use offer::*;
pub use ping::*;
pub use user::*;
pub use voucher::*;
