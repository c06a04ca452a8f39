//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::voucher::DEFAULT_CODE_LENGTH;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 兑换码长度允许范围
const CODE_LENGTH_RANGE: RangeInclusive<usize> = 4..=64;

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOUCHER_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOUCHER_SERVER__PORT=8080`
/// - `VOUCHER_DATABASE__PATH=/data/voucher.db`
/// - `VOUCHER_VOUCHER__RNG_SEED=42`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.path", "data/voucher.db")?
        .set_default("database.max_connections", 5)?
        .set_default("voucher.code_length", DEFAULT_CODE_LENGTH as u64)?
        .set_default("voucher.default_expiry_days", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 例如: VOUCHER_VOUCHER__CODE_LENGTH=12
    builder = builder.add_source(
        Environment::with_prefix("VOUCHER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if !CODE_LENGTH_RANGE.contains(&config.voucher.code_length) {
        return Err(ConfigError::ValidationError(format!(
            "Voucher code length must be between {} and {}, got {}",
            CODE_LENGTH_RANGE.start(),
            CODE_LENGTH_RANGE.end(),
            config.voucher.code_length
        )));
    }

    if config.voucher.default_expiry_days == 0 {
        return Err(ConfigError::ValidationError(
            "Default voucher expiry cannot be 0 days".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Voucher Code Length: {}", config.voucher.code_length);
    tracing::info!("Voucher Default Expiry: {} days", config.voucher.default_expiry_days);
    match config.voucher.rng_seed {
        Some(seed) => tracing::info!("Voucher RNG: seeded ({})", seed),
        None => tracing::info!("Voucher RNG: OS entropy"),
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_code_length() {
        let mut config = AppConfig::default();
        config.voucher.code_length = 3;
        assert!(validate_config(&config).is_err());

        config.voucher.code_length = 65;
        assert!(validate_config(&config).is_err());

        config.voucher.code_length = 64;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_expiry() {
        let mut config = AppConfig::default();
        config.voucher.default_expiry_days = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[voucher]
code_length = 12
rng_seed = 42
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.voucher.code_length, 12);
        assert_eq!(config.voucher.rng_seed, Some(42));
        assert_eq!(config.voucher.default_expiry_days, 30);
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[voucher]\ncode_length = 2").unwrap();

        let result = load_config_from_path(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
