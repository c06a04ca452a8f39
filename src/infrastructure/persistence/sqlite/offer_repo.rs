//! SQLite Offer Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::database::{map_sqlx_error, parse_timestamp};
use super::DbPool;
use crate::application::ports::{NewOffer, OfferRecord, OfferRepositoryPort, RepositoryError};

/// SQLite Offer Repository
pub struct SqliteOfferRepository {
    pool: DbPool,
}

impl SqliteOfferRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OfferRow {
    id: i64,
    name: String,
    discount_percentage: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<OfferRow> for OfferRecord {
    type Error = RepositoryError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        Ok(OfferRecord {
            id: row.id,
            name: row.name,
            discount_percentage: u32::try_from(row.discount_percentage)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

const SELECT_OFFER: &str =
    "SELECT id, name, discount_percentage, created_at, updated_at FROM offers";

#[async_trait]
impl OfferRepositoryPort for SqliteOfferRepository {
    async fn create(&self, offer: &NewOffer) -> Result<OfferRecord, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO offers (name, discount_percentage, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&offer.name)
        .bind(i64::from(offer.discount_percentage))
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(OfferRecord {
            id: result.last_insert_rowid(),
            name: offer.name.clone(),
            discount_percentage: offer.discount_percentage,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OfferRecord>, RepositoryError> {
        let row: Option<OfferRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_OFFER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(OfferRecord::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<OfferRecord>, RepositoryError> {
        let row: Option<OfferRow> = sqlx::query_as(&format!("{} WHERE name = ?", SELECT_OFFER))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(OfferRecord::try_from).transpose()
    }

    async fn update(&self, offer: &OfferRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE offers
            SET name = ?, discount_percentage = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&offer.name)
        .bind(i64::from(offer.discount_percentage))
        .bind(offer.updated_at.to_rfc3339())
        .bind(offer.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("offer {}", offer.id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    #[tokio::test]
    async fn test_create_find_update() {
        let repo = SqliteOfferRepository::new(test_pool().await);

        let mut offer = repo
            .create(&NewOffer {
                name: "offer1".to_string(),
                discount_percentage: 98,
            })
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(offer.id).await.unwrap(), Some(offer.clone()));
        assert_eq!(repo.find_by_name("offer1").await.unwrap(), Some(offer.clone()));
        assert_eq!(repo.find_by_name("offer2").await.unwrap(), None);

        offer.discount_percentage = 15;
        repo.update(&offer).await.unwrap();

        let stored = repo.find_by_id(offer.id).await.unwrap().unwrap();
        assert_eq!(stored.discount_percentage, 15);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = SqliteOfferRepository::new(test_pool().await);
        let offer = NewOffer {
            name: "offer1".to_string(),
            discount_percentage: 10,
        };

        repo.create(&offer).await.unwrap();

        assert!(matches!(
            repo.create(&offer).await,
            Err(RepositoryError::Duplicate(_))
        ));
    }
}
