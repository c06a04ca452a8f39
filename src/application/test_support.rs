//! 测试用的内存端口实现
//!
//! 行为与 SQLite 实现一致：自增 ID、唯一约束、按主键覆盖更新。
//! 额外记录调用次数，用于断言某些校验在访问存储之前完成。

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    CodeGeneratorPort, NewOffer, NewUser, NewVoucher, OfferRecord, OfferRepositoryPort,
    RepositoryError, UserRecord, UserRepositoryPort, VoucherRecord, VoucherRepositoryPort,
};
use crate::domain::voucher::VoucherCode;

fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap() + 1
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserRecord>>,
    lookups: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<UserRecord> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Duplicate(format!("users.email: {}", user.email)));
        }
        let now = Utc::now();
        let record = UserRecord {
            id: next_id(users.len()),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", user.id)))?;
        *slot = user.clone();
        Ok(())
    }
}

// ============================================================================
// Offers
// ============================================================================

#[derive(Default)]
pub struct InMemoryOfferRepository {
    offers: Mutex<Vec<OfferRecord>>,
    lookups: AtomicUsize,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<OfferRecord> {
        self.offers.lock().unwrap().iter().find(|o| o.id == id).cloned()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OfferRepositoryPort for InMemoryOfferRepository {
    async fn create(&self, offer: &NewOffer) -> Result<OfferRecord, RepositoryError> {
        let mut offers = self.offers.lock().unwrap();
        if offers.iter().any(|o| o.name == offer.name) {
            return Err(RepositoryError::Duplicate(format!("offers.name: {}", offer.name)));
        }
        let now = Utc::now();
        let record = OfferRecord {
            id: next_id(offers.len()),
            name: offer.name.clone(),
            discount_percentage: offer.discount_percentage,
            created_at: now,
            updated_at: now,
        };
        offers.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OfferRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<OfferRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let offers = self.offers.lock().unwrap();
        Ok(offers.iter().find(|o| o.name == name).cloned())
    }

    async fn update(&self, offer: &OfferRecord) -> Result<(), RepositoryError> {
        let mut offers = self.offers.lock().unwrap();
        let slot = offers
            .iter_mut()
            .find(|o| o.id == offer.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("offer {}", offer.id)))?;
        *slot = offer.clone();
        Ok(())
    }
}

// ============================================================================
// Vouchers
// ============================================================================

#[derive(Default)]
pub struct InMemoryVoucherRepository {
    vouchers: Mutex<Vec<VoucherRecord>>,
    lookups: AtomicUsize,
    updates: AtomicUsize,
}

impl InMemoryVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<VoucherRecord> {
        self.vouchers.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<VoucherRecord> {
        self.vouchers.lock().unwrap().iter().find(|v| v.id == id).cloned()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoucherRepositoryPort for InMemoryVoucherRepository {
    async fn create(&self, voucher: &NewVoucher) -> Result<VoucherRecord, RepositoryError> {
        let mut vouchers = self.vouchers.lock().unwrap();
        if vouchers.iter().any(|v| v.code == voucher.code) {
            return Err(RepositoryError::Duplicate(format!("vouchers.code: {}", voucher.code)));
        }
        let record = VoucherRecord {
            id: next_id(vouchers.len()),
            code: voucher.code.clone(),
            user_id: voucher.user_id,
            offer_id: voucher.offer_id,
            is_used: false,
            used_at: None,
            expire_time: voucher.expire_time,
            created_at: voucher.issued_at,
            updated_at: voucher.issued_at,
        };
        vouchers.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<VoucherRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<VoucherRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let vouchers = self.vouchers.lock().unwrap();
        Ok(vouchers.iter().find(|v| v.code == code).cloned())
    }

    async fn find_unused_by_user(&self, user_id: i64) -> Result<Vec<VoucherRecord>, RepositoryError> {
        let vouchers = self.vouchers.lock().unwrap();
        Ok(vouchers
            .iter()
            .filter(|v| v.user_id == user_id && !v.is_used)
            .cloned()
            .collect())
    }

    async fn update(&self, voucher: &VoucherRecord) -> Result<(), RepositoryError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut vouchers = self.vouchers.lock().unwrap();
        if vouchers
            .iter()
            .any(|v| v.id != voucher.id && v.code == voucher.code)
        {
            return Err(RepositoryError::Duplicate(format!("vouchers.code: {}", voucher.code)));
        }
        let slot = vouchers
            .iter_mut()
            .find(|v| v.id == voucher.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("voucher {}", voucher.id)))?;
        *slot = voucher.clone();
        Ok(())
    }
}

// ============================================================================
// Code generator
// ============================================================================

/// 按预设顺序返回兑换码；用完后生成 `{length}` 位的递增编号
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    counter: AtomicUsize,
    length: usize,
}

impl SequenceCodeGenerator {
    pub fn from_codes<const N: usize>(codes: [&str; N]) -> Self {
        let length = codes.first().map(|c| c.len()).unwrap_or(8);
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            counter: AtomicUsize::new(0),
            length,
        }
    }

    pub fn distinct(length: usize) -> Self {
        Self {
            codes: Mutex::new(VecDeque::new()),
            counter: AtomicUsize::new(0),
            length,
        }
    }
}

impl CodeGeneratorPort for SequenceCodeGenerator {
    fn generate(&self) -> VoucherCode {
        if let Some(code) = self.codes.lock().unwrap().pop_front() {
            return VoucherCode::new(code).unwrap();
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        VoucherCode::new(format!("{:0>width$}", n, width = self.length)).unwrap()
    }

    fn code_length(&self) -> usize {
        self.length
    }
}
