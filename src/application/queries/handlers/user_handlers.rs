//! User Query Handlers

use std::sync::Arc;

use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{
    OfferRecord, OfferRepositoryPort, UserRecord, UserRepositoryPort, VoucherRecord,
    VoucherRepositoryPort,
};
use crate::application::queries::{GetUser, GetUserByEmail, ListUsers};

// ============================================================================
// Response DTOs
// ============================================================================

/// 未使用的兑换券及其优惠活动
///
/// 优惠活动可能已不存在，此时为 None
#[derive(Debug, Clone)]
pub struct ActiveVoucher {
    pub voucher: VoucherRecord,
    pub offer: Option<OfferRecord>,
}

/// 用户及其未使用的兑换券
#[derive(Debug, Clone)]
pub struct UserWithVouchers {
    pub user: UserRecord,
    pub vouchers: Vec<ActiveVoucher>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<UserRecord, ApplicationError> {
        require_id(query.user_id)?;

        self.user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))
    }
}

/// GetUserByEmail Handler
pub struct GetUserByEmailHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
    offer_repo: Arc<dyn OfferRepositoryPort>,
}

impl GetUserByEmailHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        voucher_repo: Arc<dyn VoucherRepositoryPort>,
        offer_repo: Arc<dyn OfferRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            voucher_repo,
            offer_repo,
        }
    }

    pub async fn handle(&self, query: GetUserByEmail) -> Result<UserWithVouchers, ApplicationError> {
        require_non_empty(&query.email, "email(string) is required")?;

        let user = self
            .user_repo
            .find_by_email(&query.email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", &query.email))?;

        let records = self.voucher_repo.find_unused_by_user(user.id).await?;
        let mut vouchers = Vec::with_capacity(records.len());
        for voucher in records {
            let offer = self.offer_repo.find_by_id(voucher.offer_id).await?;
            vouchers.push(ActiveVoucher { voucher, offer });
        }

        Ok(UserWithVouchers { user, vouchers })
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<UserRecord>, ApplicationError> {
        Ok(self.user_repo.find_all().await?)
    }
}
