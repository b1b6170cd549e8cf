//! Qanda - Server Entry Point
//!
//! Composition root: settings, logging, database, migrations, RPC server.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use config::Settings;
use qanda_api_rpc::{RpcServer, RpcServerConfig};
use qanda_core::port::time_provider::SystemTimeProvider;
use qanda_core::port::{AnswerRepository, QuestionRepository, TimeProvider};
use qanda_infra_sqlite::{
    connect_with_retry, run_migrations, SqliteAnswerRepository, SqliteQuestionRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let settings = Settings::load()?;

    // 2. Initialize logging
    let _log_guard = telemetry::init_tracing(settings.log_format)?;

    info!("Qanda server v{} starting...", VERSION);

    // 3. Initialize database
    if let Some(dir) = settings.database_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    info!(database_url = %settings.database_url, "Initializing database...");

    let pool = connect_with_retry(&settings.database_url, &settings.retry())
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let question_repo: Arc<dyn QuestionRepository> = Arc::new(SqliteQuestionRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let answer_repo: Arc<dyn AnswerRepository> =
        Arc::new(SqliteAnswerRepository::new(pool.clone(), time_provider));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: settings.rpc_host.clone(),
        port: settings.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, question_repo, answer_repo)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
