//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod code_generator;
mod repositories;

pub use code_generator::CodeGeneratorPort;
pub use repositories::{
    NewOffer, NewUser, NewVoucher, OfferRecord, OfferRepositoryPort, RepositoryError,
    UserRecord, UserRepositoryPort, VoucherRecord, VoucherRepositoryPort,
};
