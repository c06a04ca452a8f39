//! Voucher Query Handlers

use std::sync::Arc;

use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{VoucherRecord, VoucherRepositoryPort};
use crate::application::queries::{GetVoucher, GetVoucherByCode};

/// GetVoucher Handler
pub struct GetVoucherHandler {
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
}

impl GetVoucherHandler {
    pub fn new(voucher_repo: Arc<dyn VoucherRepositoryPort>) -> Self {
        Self { voucher_repo }
    }

    pub async fn handle(&self, query: GetVoucher) -> Result<VoucherRecord, ApplicationError> {
        require_id(query.voucher_id)?;

        self.voucher_repo
            .find_by_id(query.voucher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voucher", query.voucher_id))
    }
}

/// GetVoucherByCode Handler
pub struct GetVoucherByCodeHandler {
    voucher_repo: Arc<dyn VoucherRepositoryPort>,
}

impl GetVoucherByCodeHandler {
    pub fn new(voucher_repo: Arc<dyn VoucherRepositoryPort>) -> Self {
        Self { voucher_repo }
    }

    pub async fn handle(&self, query: GetVoucherByCode) -> Result<VoucherRecord, ApplicationError> {
        require_non_empty(&query.code, "Code(string) is required")?;

        self.voucher_repo
            .find_by_code(&query.code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voucher", &query.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryVoucherRepository;

    #[tokio::test]
    async fn test_validation_happens_before_store() {
        let repo = Arc::new(InMemoryVoucherRepository::new());

        let by_id = GetVoucherHandler::new(repo.clone())
            .handle(GetVoucher { voucher_id: 0 })
            .await;
        let by_code = GetVoucherByCodeHandler::new(repo.clone())
            .handle(GetVoucherByCode {
                code: String::new(),
            })
            .await;

        assert!(matches!(by_id, Err(ApplicationError::ValidationError(_))));
        match by_code {
            Err(ApplicationError::ValidationError(msg)) => {
                assert_eq!(msg, "Code(string) is required")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(repo.lookup_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_voucher_is_not_found() {
        let repo = Arc::new(InMemoryVoucherRepository::new());

        let result = GetVoucherHandler::new(repo)
            .handle(GetVoucher { voucher_id: 10 })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
