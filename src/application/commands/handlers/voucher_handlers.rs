//! Voucher Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{CreateVoucher, RedeemVoucher, UpdateVoucher};
use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{
    CodeGeneratorPort, NewVoucher, OfferRepositoryPort, UserRepositoryPort, VoucherRecord,
    VoucherRepositoryPort,
};
use crate::domain::voucher::{
    ExpiryWindow, Redemption, RedemptionOutcome, VoucherCode, VoucherError,
};

// ============================================================================
// CreateVoucher
// ============================================================================

/// CreateVoucher Handler
pub struct CreateVoucherHandler {
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
    code_generator: Arc<dyn CodeGeneratorPort>,
    default_expiry_days: u32,
}

impl CreateVoucherHandler {
    pub fn new(
        voucher_repo: Arc<dyn VoucherRepositoryPort>,
        code_generator: Arc<dyn CodeGeneratorPort>,
        default_expiry_days: u32,
    ) -> Self {
        Self {
            voucher_repo,
            code_generator,
            default_expiry_days,
        }
    }

    pub async fn handle(&self, command: CreateVoucher) -> Result<VoucherRecord, ApplicationError> {
        let code = match command.code.filter(|c| !c.is_empty()) {
            Some(code) => VoucherCode::new(code)?,
            None => self.code_generator.generate(),
        };

        let window = ExpiryWindow::days(command.expiry_days.unwrap_or(self.default_expiry_days));
        let issued_at = Utc::now();

        let voucher = self
            .voucher_repo
            .create(&NewVoucher {
                code: code.into_inner(),
                user_id: command.user_id,
                offer_id: command.offer_id,
                expire_time: window.expire_time_from(issued_at)?,
                issued_at,
            })
            .await?;

        tracing::info!(
            voucher_id = voucher.id,
            user_id = voucher.user_id,
            offer_id = voucher.offer_id,
            expire_time = %voucher.expire_time,
            "Voucher created"
        );

        Ok(voucher)
    }
}

// ============================================================================
// UpdateVoucher
// ============================================================================

/// UpdateVoucher Handler
pub struct UpdateVoucherHandler {
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
}

impl UpdateVoucherHandler {
    pub fn new(voucher_repo: Arc<dyn VoucherRepositoryPort>) -> Self {
        Self { voucher_repo }
    }

    pub async fn handle(&self, command: UpdateVoucher) -> Result<VoucherRecord, ApplicationError> {
        require_id(command.principal_id)?;
        let code = VoucherCode::new(command.code)?;

        let mut voucher = self
            .voucher_repo
            .find_by_id(command.principal_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voucher", command.principal_id))?;

        if command.id != voucher.id {
            tracing::warn!(
                principal_id = command.principal_id,
                requested_id = command.id,
                "Voucher update rejected: id mismatch"
            );
            return Err(ApplicationError::unauthorized());
        }

        voucher.code = code.into_inner();
        voucher.user_id = command.user_id;
        voucher.offer_id = command.offer_id;
        voucher.updated_at = Utc::now();

        self.voucher_repo.update(&voucher).await?;

        tracing::info!(voucher_id = voucher.id, "Voucher updated");

        Ok(voucher)
    }
}

// ============================================================================
// RedeemVoucher
// ============================================================================

/// 兑换响应
#[derive(Debug, Clone)]
pub struct RedeemVoucherResponse {
    pub outcome: RedemptionOutcome,
    /// 兑换成功时为更新后的记录，否则为未修改的记录
    pub voucher: VoucherRecord,
    pub discount_percentage: u32,
}

/// RedeemVoucher Handler
///
/// 校验与写入之间没有加锁，同一兑换码的并发兑换可能都通过 is_used 检查
pub struct RedeemVoucherHandler {
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
    offer_repo: Arc<dyn OfferRepositoryPort>,
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl RedeemVoucherHandler {
    pub fn new(
        voucher_repo: Arc<dyn VoucherRepositoryPort>,
        offer_repo: Arc<dyn OfferRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
    ) -> Self {
        Self {
            voucher_repo,
            offer_repo,
            user_repo,
        }
    }

    pub async fn handle(
        &self,
        command: RedeemVoucher,
    ) -> Result<RedeemVoucherResponse, ApplicationError> {
        require_non_empty(&command.code, "Code(string) is required")?;

        // 1. 兑换码
        let mut voucher = self
            .voucher_repo
            .find_by_code(&command.code)
            .await?
            .ok_or_else(|| VoucherError::InvalidVoucher(command.code.clone()))?;

        // 2. 所属优惠活动
        let offer = self
            .offer_repo
            .find_by_id(voucher.offer_id)
            .await?
            .ok_or(VoucherError::OfferUnavailable(voucher.offer_id))?;

        // 3. 所属用户
        let owner = self
            .user_repo
            .find_by_id(voucher.user_id)
            .await?
            .ok_or(VoucherError::InvalidUser(voucher.user_id))?;

        // 4-6. 归属 / 已用 / 过期
        let outcome = Redemption {
            owner_email: &owner.email,
            is_used: voucher.is_used,
            expire_time: voucher.expire_time,
        }
        .decide(&command.email, Utc::now())
        .map_err(|e| {
            tracing::warn!(voucher_id = voucher.id, error = %e, "Voucher redemption rejected");
            e
        })?;

        // 7. 标记已用
        if let RedemptionOutcome::Redeemed { used_at } = outcome {
            voucher.is_used = true;
            voucher.used_at = Some(used_at);
            voucher.updated_at = used_at;
            self.voucher_repo.update(&voucher).await?;

            tracing::info!(
                voucher_id = voucher.id,
                user_id = owner.id,
                offer_id = offer.id,
                discount_percentage = offer.discount_percentage,
                "Voucher redeemed"
            );
        } else {
            tracing::info!(
                voucher_id = voucher.id,
                outcome = outcome.message(),
                "Voucher not redeemable"
            );
        }

        Ok(RedeemVoucherResponse {
            outcome,
            voucher,
            discount_percentage: offer.discount_percentage,
        })
    }
}
