//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;
use std::time::Instant;

use crate::application::{
    // Command handlers
    CreateOfferHandler, CreateVoucherHandler, GenerateVouchersHandler, RedeemVoucherHandler,
    RegisterUserHandler, UpdateOfferHandler, UpdateUserHandler, UpdateVoucherHandler,
    // Query handlers
    GetOfferByNameHandler, GetOfferHandler, GetUserByEmailHandler, GetUserHandler,
    GetVoucherByCodeHandler, GetVoucherHandler, ListUsersHandler,
    // Ports
    CodeGeneratorPort, OfferRepositoryPort, UserRepositoryPort, VoucherRepositoryPort,
};

/// 应用状态
pub struct AppState {
    /// 进程启动时间，用于 ping 返回运行时长
    pub started_at: Instant,

    // ========== User ==========
    pub register_user_handler: RegisterUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub get_user_handler: GetUserHandler,
    pub get_user_by_email_handler: GetUserByEmailHandler,
    pub list_users_handler: ListUsersHandler,

    // ========== Offer ==========
    pub create_offer_handler: CreateOfferHandler,
    pub update_offer_handler: UpdateOfferHandler,
    pub generate_vouchers_handler: GenerateVouchersHandler,
    pub get_offer_handler: GetOfferHandler,
    pub get_offer_by_name_handler: GetOfferByNameHandler,

    // ========== Voucher ==========
    pub create_voucher_handler: CreateVoucherHandler,
    pub update_voucher_handler: UpdateVoucherHandler,
    pub redeem_voucher_handler: RedeemVoucherHandler,
    pub get_voucher_handler: GetVoucherHandler,
    pub get_voucher_by_code_handler: GetVoucherByCodeHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        offer_repo: Arc<dyn OfferRepositoryPort>,
        voucher_repo: Arc<dyn VoucherRepositoryPort>,
        code_generator: Arc<dyn CodeGeneratorPort>,
        default_expiry_days: u32,
    ) -> Self {
        Self {
            started_at: Instant::now(),

            register_user_handler: RegisterUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            get_user_handler: GetUserHandler::new(user_repo.clone()),
            get_user_by_email_handler: GetUserByEmailHandler::new(
                user_repo.clone(),
                voucher_repo.clone(),
                offer_repo.clone(),
            ),
            list_users_handler: ListUsersHandler::new(user_repo.clone()),

            create_offer_handler: CreateOfferHandler::new(offer_repo.clone()),
            update_offer_handler: UpdateOfferHandler::new(offer_repo.clone()),
            generate_vouchers_handler: GenerateVouchersHandler::new(
                offer_repo.clone(),
                user_repo.clone(),
                voucher_repo.clone(),
                code_generator.clone(),
            ),
            get_offer_handler: GetOfferHandler::new(offer_repo.clone()),
            get_offer_by_name_handler: GetOfferByNameHandler::new(offer_repo.clone()),

            create_voucher_handler: CreateVoucherHandler::new(
                voucher_repo.clone(),
                code_generator,
                default_expiry_days,
            ),
            update_voucher_handler: UpdateVoucherHandler::new(voucher_repo.clone()),
            redeem_voucher_handler: RedeemVoucherHandler::new(
                voucher_repo.clone(),
                offer_repo.clone(),
                user_repo,
            ),
            get_voucher_handler: GetVoucherHandler::new(voucher_repo.clone()),
            get_voucher_by_code_handler: GetVoucherByCodeHandler::new(voucher_repo),
        }
    }
}
