//! Voucher - 优惠活动与兑换券管理服务
//!
//! - Domain: voucher/ (Bounded Context)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, adapters

use std::sync::Arc;

use voucher::application::CodeGeneratorPort;
use voucher::config::{load_config, print_config};
use voucher::infrastructure::adapters::RngCodeGenerator;
use voucher::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voucher::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteOfferRepository, SqliteUserRepository,
    SqliteVoucherRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voucher={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Voucher service starting");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.path, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let offer_repo = Arc::new(SqliteOfferRepository::new(pool.clone()));
    let voucher_repo = Arc::new(SqliteVoucherRepository::new(pool));

    // 创建兑换码生成器
    let code_generator: Arc<dyn CodeGeneratorPort> = match config.voucher.rng_seed {
        Some(seed) => Arc::new(RngCodeGenerator::seeded(seed, config.voucher.code_length)),
        None => Arc::new(RngCodeGenerator::from_entropy(config.voucher.code_length)),
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_body_bytes: config.server.max_body_bytes,
    };
    let state = AppState::new(
        user_repo,
        offer_repo,
        voucher_repo,
        code_generator,
        config.voucher.default_expiry_days,
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
