//! Offer Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{CreateOffer, GenerateVouchers, UpdateOffer};
use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{
    CodeGeneratorPort, NewOffer, NewVoucher, OfferRecord, OfferRepositoryPort, UserRepositoryPort,
    VoucherRepositoryPort,
};
use crate::domain::voucher::ExpiryWindow;

// ============================================================================
// CreateOffer
// ============================================================================

/// CreateOffer Handler
pub struct CreateOfferHandler {
    offer_repo: Arc<dyn OfferRepositoryPort>,
}

impl CreateOfferHandler {
    pub fn new(offer_repo: Arc<dyn OfferRepositoryPort>) -> Self {
        Self { offer_repo }
    }

    pub async fn handle(&self, command: CreateOffer) -> Result<OfferRecord, ApplicationError> {
        require_non_empty(&command.name, "Name(string) is required")?;

        let offer = self
            .offer_repo
            .create(&NewOffer {
                name: command.name,
                discount_percentage: command.discount_percentage,
            })
            .await?;

        tracing::info!(
            offer_id = offer.id,
            name = %offer.name,
            discount_percentage = offer.discount_percentage,
            "Offer created"
        );

        Ok(offer)
    }
}

// ============================================================================
// UpdateOffer
// ============================================================================

/// UpdateOffer Handler
pub struct UpdateOfferHandler {
    offer_repo: Arc<dyn OfferRepositoryPort>,
}

impl UpdateOfferHandler {
    pub fn new(offer_repo: Arc<dyn OfferRepositoryPort>) -> Self {
        Self { offer_repo }
    }

    pub async fn handle(&self, command: UpdateOffer) -> Result<OfferRecord, ApplicationError> {
        require_id(command.principal_id)?;

        let mut offer = self
            .offer_repo
            .find_by_id(command.principal_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Offer", command.principal_id))?;

        if command.id != offer.id {
            tracing::warn!(
                principal_id = command.principal_id,
                requested_id = command.id,
                "Offer update rejected: id mismatch"
            );
            return Err(ApplicationError::unauthorized());
        }

        offer.name = command.name;
        offer.discount_percentage = command.discount_percentage;
        offer.updated_at = Utc::now();

        self.offer_repo.update(&offer).await?;

        tracing::info!(offer_id = offer.id, "Offer updated");

        Ok(offer)
    }
}

// ============================================================================
// GenerateVouchers
// ============================================================================

/// 批量生成结果
///
/// 只统计成功与失败的数量，不逐个报告用户
#[derive(Debug, Clone)]
pub struct GenerateVouchersResponse {
    pub offer_id: i64,
    pub offer_name: String,
    pub generated: usize,
    pub failed: usize,
}

/// GenerateVouchers Handler
///
/// 每个用户一张兑换券，逐条独立写入，没有事务：
/// 中途写入失败只记录日志并继续，已写入的兑换券不会回滚
pub struct GenerateVouchersHandler {
    offer_repo: Arc<dyn OfferRepositoryPort>,
    user_repo: Arc<dyn UserRepositoryPort>,
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
    code_generator: Arc<dyn CodeGeneratorPort>,
}

impl GenerateVouchersHandler {
    pub fn new(
        offer_repo: Arc<dyn OfferRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        voucher_repo: Arc<dyn VoucherRepositoryPort>,
        code_generator: Arc<dyn CodeGeneratorPort>,
    ) -> Self {
        Self {
            offer_repo,
            user_repo,
            voucher_repo,
            code_generator,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateVouchers,
    ) -> Result<GenerateVouchersResponse, ApplicationError> {
        require_non_empty(&command.offer_name, "Name(string) is required")?;

        let offer = self
            .offer_repo
            .find_by_name(&command.offer_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Offer", &command.offer_name))?;

        let users = self.user_repo.find_all().await?;
        let window = ExpiryWindow::days(command.expiry_days);

        let mut generated = 0;
        let mut failed = 0;

        for user in &users {
            let issued_at = Utc::now();
            let voucher = NewVoucher {
                code: self.code_generator.generate().into_inner(),
                user_id: user.id,
                offer_id: offer.id,
                expire_time: window.expire_time_from(issued_at)?,
                issued_at,
            };

            match self.voucher_repo.create(&voucher).await {
                Ok(_) => generated += 1,
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        offer_id = offer.id,
                        user_id = user.id,
                        error = %e,
                        "Failed to create voucher"
                    );
                }
            }
        }

        tracing::info!(
            offer_id = offer.id,
            users = users.len(),
            generated = generated,
            failed = failed,
            expiry_days = window.as_days(),
            code_length = self.code_generator.code_length(),
            "Vouchers generated"
        );

        Ok(GenerateVouchersResponse {
            offer_id: offer.id,
            offer_name: offer.name,
            generated,
            failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewUser;
    use crate::application::test_support::{
        InMemoryOfferRepository, InMemoryUserRepository, InMemoryVoucherRepository,
        SequenceCodeGenerator,
    };
    use chrono::Duration;
    use std::collections::HashSet;

    struct Fixture {
        offers: Arc<InMemoryOfferRepository>,
        users: Arc<InMemoryUserRepository>,
        vouchers: Arc<InMemoryVoucherRepository>,
    }

    async fn fixture(user_count: usize) -> Fixture {
        let fixture = Fixture {
            offers: Arc::new(InMemoryOfferRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            vouchers: Arc::new(InMemoryVoucherRepository::new()),
        };
        fixture
            .offers
            .create(&NewOffer {
                name: "summer".to_string(),
                discount_percentage: 25,
            })
            .await
            .unwrap();
        for i in 0..user_count {
            fixture
                .users
                .create(&NewUser {
                    first_name: format!("user{}", i),
                    last_name: String::new(),
                    email: format!("user{}@cc.cc", i),
                })
                .await
                .unwrap();
        }
        fixture
    }

    fn handler(fixture: &Fixture, codes: Arc<dyn CodeGeneratorPort>) -> GenerateVouchersHandler {
        GenerateVouchersHandler::new(
            fixture.offers.clone(),
            fixture.users.clone(),
            fixture.vouchers.clone(),
            codes,
        )
    }

    #[tokio::test]
    async fn test_one_voucher_per_user() {
        let fixture = fixture(4).await;
        let codes = Arc::new(SequenceCodeGenerator::distinct(8));

        let result = handler(&fixture, codes)
            .handle(GenerateVouchers {
                offer_name: "summer".to_string(),
                expiry_days: 2,
            })
            .await
            .unwrap();

        assert_eq!(result.generated, 4);
        assert_eq!(result.failed, 0);

        let vouchers = fixture.vouchers.all();
        assert_eq!(vouchers.len(), 4);

        let owners: HashSet<_> = vouchers.iter().map(|v| v.user_id).collect();
        assert_eq!(owners.len(), 4);

        let codes: HashSet<_> = vouchers.iter().map(|v| v.code.clone()).collect();
        assert_eq!(codes.len(), 4);

        for voucher in &vouchers {
            assert_eq!(voucher.code.len(), 8);
            assert_eq!(voucher.offer_id, result.offer_id);
            assert!(!voucher.is_used);
            assert_eq!(voucher.used_at, None);
            assert_eq!(voucher.expire_time - voucher.created_at, Duration::hours(48));
        }
    }

    #[tokio::test]
    async fn test_unknown_offer_is_not_found() {
        let fixture = fixture(2).await;
        let codes = Arc::new(SequenceCodeGenerator::distinct(8));

        let result = handler(&fixture, codes)
            .handle(GenerateVouchers {
                offer_name: "winter".to_string(),
                expiry_days: 2,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        assert!(fixture.vouchers.all().is_empty());
    }

    #[tokio::test]
    async fn test_empty_offer_name_is_rejected() {
        let fixture = fixture(1).await;
        let codes = Arc::new(SequenceCodeGenerator::distinct(8));

        let result = handler(&fixture, codes)
            .handle(GenerateVouchers {
                offer_name: String::new(),
                expiry_days: 2,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_partial_batch() {
        let fixture = fixture(3).await;
        // 第二个兑换码与第一个重复，唯一约束使第二次写入失败
        let codes = Arc::new(SequenceCodeGenerator::from_codes(["AAAA1111", "AAAA1111", "BBBB2222"]));

        let result = handler(&fixture, codes)
            .handle(GenerateVouchers {
                offer_name: "summer".to_string(),
                expiry_days: 1,
            })
            .await
            .unwrap();

        assert_eq!(result.generated, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(fixture.vouchers.all().len(), 2);
    }

    #[tokio::test]
    async fn test_no_users_generates_nothing() {
        let fixture = fixture(0).await;
        let codes = Arc::new(SequenceCodeGenerator::distinct(8));

        let result = handler(&fixture, codes)
            .handle(GenerateVouchers {
                offer_name: "summer".to_string(),
                expiry_days: 1,
            })
            .await
            .unwrap();

        assert_eq!(result.generated, 0);
        assert_eq!(result.failed, 0);
    }
}
