//! Random Code Generator - 兑换码生成器
//!
//! 持有一个 StdRng，启动时可指定种子以便复现

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

use crate::application::ports::CodeGeneratorPort;
use crate::domain::voucher::VoucherCode;

/// 基于 StdRng 的兑换码生成器
pub struct RngCodeGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl RngCodeGenerator {
    /// 使用系统熵初始化
    pub fn from_entropy(length: usize) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            length,
        }
    }

    /// 使用固定种子初始化，相同种子产生相同的兑换码序列
    pub fn seeded(seed: u64, length: usize) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            length,
        }
    }
}

impl CodeGeneratorPort for RngCodeGenerator {
    fn generate(&self) -> VoucherCode {
        // 生成过程不会在持锁时 panic，中毒的锁可以安全复用
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        VoucherCode::generate(&mut *rng, self.length)
    }

    fn code_length(&self) -> usize {
        self.length
    }
}
