//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、CodeGenerator）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use commands::{
    // User commands
    RegisterUser,
    UpdateUser,
    // Offer commands
    CreateOffer,
    GenerateVouchers,
    UpdateOffer,
    // Voucher commands
    CreateVoucher,
    RedeemVoucher,
    UpdateVoucher,
    // Handlers
    handlers::{
        CreateOfferHandler, CreateVoucherHandler, GenerateVouchersHandler,
        GenerateVouchersResponse, RedeemVoucherHandler, RedeemVoucherResponse,
        RegisterUserHandler, UpdateOfferHandler, UpdateUserHandler, UpdateVoucherHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Code generator
    CodeGeneratorPort,
    // Repositories
    NewOffer,
    NewUser,
    NewVoucher,
    OfferRecord,
    OfferRepositoryPort,
    RepositoryError,
    UserRecord,
    UserRepositoryPort,
    VoucherRecord,
    VoucherRepositoryPort,
};

pub use queries::{
    // User queries
    GetUser,
    GetUserByEmail,
    ListUsers,
    // Offer queries
    GetOffer,
    GetOfferByName,
    // Voucher queries
    GetVoucher,
    GetVoucherByCode,
    // Handlers
    handlers::{
        ActiveVoucher, GetOfferByNameHandler, GetOfferHandler, GetUserByEmailHandler,
        GetUserHandler, GetVoucherByCodeHandler, GetVoucherHandler, ListUsersHandler,
        UserWithVouchers,
    },
};
