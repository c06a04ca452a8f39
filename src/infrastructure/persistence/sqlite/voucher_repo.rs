//! SQLite Voucher Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::{format_timestamp, map_sqlx_error, parse_timestamp};
use super::DbPool;
use crate::application::ports::{
    NewVoucher, RepositoryError, VoucherRecord, VoucherRepositoryPort,
};

/// SQLite Voucher Repository
pub struct SqliteVoucherRepository {
    pool: DbPool,
}

impl SqliteVoucherRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VoucherRow {
    id: i64,
    code: String,
    user_id: i64,
    offer_id: i64,
    is_used: bool,
    used_at: Option<String>,
    expire_time: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<VoucherRow> for VoucherRecord {
    type Error = RepositoryError;

    fn try_from(row: VoucherRow) -> Result<Self, Self::Error> {
        Ok(VoucherRecord {
            id: row.id,
            code: row.code,
            user_id: row.user_id,
            offer_id: row.offer_id,
            is_used: row.is_used,
            used_at: row.used_at.as_deref().map(parse_timestamp).transpose()?,
            expire_time: parse_timestamp(&row.expire_time)?,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

const SELECT_VOUCHER: &str = "SELECT id, code, user_id, offer_id, is_used, used_at, expire_time, created_at, updated_at FROM vouchers";

#[async_trait]
impl VoucherRepositoryPort for SqliteVoucherRepository {
    async fn create(&self, voucher: &NewVoucher) -> Result<VoucherRecord, RepositoryError> {
        let expire_time = format_timestamp(voucher.expire_time)?;
        let issued_at = format_timestamp(voucher.issued_at)?;

        let result = sqlx::query(
            r#"
            INSERT INTO vouchers (code, user_id, offer_id, is_used, used_at, expire_time, created_at, updated_at)
            VALUES (?, ?, ?, 0, NULL, ?, ?, ?)
            "#,
        )
        .bind(&voucher.code)
        .bind(voucher.user_id)
        .bind(voucher.offer_id)
        .bind(&expire_time)
        .bind(&issued_at)
        .bind(&issued_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(VoucherRecord {
            id: result.last_insert_rowid(),
            code: voucher.code.clone(),
            user_id: voucher.user_id,
            offer_id: voucher.offer_id,
            is_used: false,
            used_at: None,
            expire_time: voucher.expire_time,
            created_at: voucher.issued_at,
            updated_at: voucher.issued_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<VoucherRecord>, RepositoryError> {
        let row: Option<VoucherRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_VOUCHER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(VoucherRecord::try_from).transpose()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<VoucherRecord>, RepositoryError> {
        let row: Option<VoucherRow> =
            sqlx::query_as(&format!("{} WHERE code = ?", SELECT_VOUCHER))
                .bind(code)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        row.map(VoucherRecord::try_from).transpose()
    }

    async fn find_unused_by_user(&self, user_id: i64) -> Result<Vec<VoucherRecord>, RepositoryError> {
        let rows: Vec<VoucherRow> = sqlx::query_as(&format!(
            "{} WHERE user_id = ? AND is_used = 0 ORDER BY id",
            SELECT_VOUCHER
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(VoucherRecord::try_from).collect()
    }

    async fn update(&self, voucher: &VoucherRecord) -> Result<(), RepositoryError> {
        let used_at = voucher.used_at.map(format_timestamp).transpose()?;
        let expire_time = format_timestamp(voucher.expire_time)?;
        let updated_at = format_timestamp(voucher.updated_at)?;

        let result = sqlx::query(
            r#"
            UPDATE vouchers
            SET code = ?, user_id = ?, offer_id = ?, is_used = ?, used_at = ?,
                expire_time = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&voucher.code)
        .bind(voucher.user_id)
        .bind(voucher.offer_id)
        .bind(voucher.is_used)
        .bind(used_at)
        .bind(&expire_time)
        .bind(&updated_at)
        .bind(voucher.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("voucher {}", voucher.id)));
        }

        Ok(())
    }
}
