//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 创建用户，返回带自增 ID 的记录
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 获取所有用户（按 ID 升序）
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 按主键覆盖可编辑字段
    async fn update(&self, user: &UserRecord) -> Result<(), RepositoryError>;
}

// ============================================================================
// Offer Repository
// ============================================================================

/// 优惠活动实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    pub id: i64,
    pub name: String,
    /// 折扣百分比，预期 0-100，不做校验
    pub discount_percentage: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的优惠活动
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub name: String,
    pub discount_percentage: u32,
}

/// Offer Repository Port
#[async_trait]
pub trait OfferRepositoryPort: Send + Sync {
    async fn create(&self, offer: &NewOffer) -> Result<OfferRecord, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<OfferRecord>, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<OfferRecord>, RepositoryError>;

    async fn update(&self, offer: &OfferRecord) -> Result<(), RepositoryError>;
}

// ============================================================================
// Voucher Repository
// ============================================================================

/// 兑换券实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherRecord {
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub offer_id: i64,
    pub is_used: bool,
    pub used_at: Option<DateTime<Utc>>,
    pub expire_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的兑换券
///
/// `issued_at` 同时作为 created_at 落库，保证 expire_time 与创建时间的差值精确
#[derive(Debug, Clone)]
pub struct NewVoucher {
    pub code: String,
    pub user_id: i64,
    pub offer_id: i64,
    pub expire_time: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
}

/// Voucher Repository Port
#[async_trait]
pub trait VoucherRepositoryPort: Send + Sync {
    async fn create(&self, voucher: &NewVoucher) -> Result<VoucherRecord, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<VoucherRecord>, RepositoryError>;

    /// 根据兑换码查找
    async fn find_by_code(&self, code: &str) -> Result<Option<VoucherRecord>, RepositoryError>;

    /// 获取用户所有未使用的兑换券
    async fn find_unused_by_user(&self, user_id: i64) -> Result<Vec<VoucherRecord>, RepositoryError>;

    /// 按主键覆盖全部字段（包括 is_used / used_at）
    async fn update(&self, voucher: &VoucherRecord) -> Result<(), RepositoryError>;
}
