//! Offer Query Handlers

use std::sync::Arc;

use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{OfferRecord, OfferRepositoryPort};
use crate::application::queries::{GetOffer, GetOfferByName};

/// GetOffer Handler
pub struct GetOfferHandler {
    offer_repo: Arc<dyn OfferRepositoryPort>,
}

impl GetOfferHandler {
    pub fn new(offer_repo: Arc<dyn OfferRepositoryPort>) -> Self {
        Self { offer_repo }
    }

    pub async fn handle(&self, query: GetOffer) -> Result<OfferRecord, ApplicationError> {
        require_id(query.offer_id)?;

        self.offer_repo
            .find_by_id(query.offer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Offer", query.offer_id))
    }
}

/// GetOfferByName Handler
pub struct GetOfferByNameHandler {
    offer_repo: Arc<dyn OfferRepositoryPort>,
}

impl GetOfferByNameHandler {
    pub fn new(offer_repo: Arc<dyn OfferRepositoryPort>) -> Self {
        Self { offer_repo }
    }

    pub async fn handle(&self, query: GetOfferByName) -> Result<OfferRecord, ApplicationError> {
        require_non_empty(&query.name, "Name(string) is required")?;

        self.offer_repo
            .find_by_name(&query.name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Offer", &query.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewOffer;
    use crate::application::test_support::InMemoryOfferRepository;

    #[tokio::test]
    async fn test_zero_id_and_empty_name_are_rejected() {
        let repo = Arc::new(InMemoryOfferRepository::new());

        let by_id = GetOfferHandler::new(repo.clone())
            .handle(GetOffer { offer_id: 0 })
            .await;
        let by_name = GetOfferByNameHandler::new(repo.clone())
            .handle(GetOfferByName {
                name: String::new(),
            })
            .await;

        assert!(matches!(by_id, Err(ApplicationError::ValidationError(_))));
        assert!(matches!(by_name, Err(ApplicationError::ValidationError(_))));
        assert_eq!(repo.lookup_calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_by_id_and_name() {
        let repo = Arc::new(InMemoryOfferRepository::new());
        let created = repo
            .create(&NewOffer {
                name: "offer1".to_string(),
                discount_percentage: 98,
            })
            .await
            .unwrap();

        let by_id = GetOfferHandler::new(repo.clone())
            .handle(GetOffer {
                offer_id: created.id,
            })
            .await
            .unwrap();
        let by_name = GetOfferByNameHandler::new(repo.clone())
            .handle(GetOfferByName {
                name: "offer1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(by_id, created);
        assert_eq!(by_name, created);

        let missing = GetOfferByNameHandler::new(repo)
            .handle(GetOfferByName {
                name: "non_existent_offer".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(ApplicationError::NotFound { .. })));
    }
}
