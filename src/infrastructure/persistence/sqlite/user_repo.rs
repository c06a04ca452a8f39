//! SQLite User Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::database::{map_sqlx_error, parse_timestamp};
use super::DbPool;
use crate::application::ports::{NewUser, RepositoryError, UserRecord, UserRepositoryPort};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

const SELECT_USER: &str =
    "SELECT id, first_name, last_name, email, created_at, updated_at FROM users";

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(UserRecord {
            id: result.last_insert_rowid(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE email = ?", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_USER))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    async fn update(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.updated_at.to_rfc3339())
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("user {}", user.id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = SqliteUserRepository::new(test_pool().await);

        let created = repo.create(&new_user("a@cc.cc")).await.unwrap();
        assert!(created.id > 0);

        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
        let by_email = repo.find_by_email("a@cc.cc").await.unwrap().unwrap();
        assert_eq!(by_id, created);
        assert_eq!(by_email, created);

        assert!(repo.find_by_id(created.id + 1).await.unwrap().is_none());
        assert!(repo.find_by_email("b@cc.cc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = SqliteUserRepository::new(test_pool().await);

        repo.create(&new_user("a@cc.cc")).await.unwrap();
        let err = repo.create(&new_user("a@cc.cc")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = SqliteUserRepository::new(test_pool().await);
        for email in ["c@cc.cc", "a@cc.cc", "b@cc.cc"] {
            repo.create(&new_user(email)).await.unwrap();
        }

        let users = repo.find_all().await.unwrap();

        let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["c@cc.cc", "a@cc.cc", "b@cc.cc"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_and_reports_missing() {
        let repo = SqliteUserRepository::new(test_pool().await);
        let mut user = repo.create(&new_user("a@cc.cc")).await.unwrap();

        user.first_name = "Changed".to_string();
        user.email = "changed@cc.cc".to_string();
        repo.update(&user).await.unwrap();

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Changed");
        assert_eq!(stored.email, "changed@cc.cc");

        user.id = 999;
        assert!(matches!(
            repo.update(&user).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
