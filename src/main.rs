use std::sync::Arc;

use anyhow::Context;
use marketplace::{
    app::{
        ads::{catalog::seed_initial_catalog, AdService, AppState, InMemoryAdStore},
        router,
    },
    infrastructure::{config::AppConfig, logger::Logger},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path_arg = std::env::args().nth(1);
    let config = AppConfig::load(path_arg.as_deref()).context("无法加载配置")?;

    Logger::init(&config.logging.level);

    let ad_service = AdService::new(Arc::new(InMemoryAdStore::new()));
    if config.catalog.seed_on_start {
        seed_initial_catalog(&ad_service);
    }

    let app = router(AppState { ad_service });

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!(%addr, "marketplace server listening");
    info!("   GET    /ads       - 列出广告 (最多 5 条)");
    info!("   POST   /ads       - 创建广告");
    info!("   GET    /ads/:id   - 获取指定广告");
    info!("   GET    /health    - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("marketplace server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
