//! 应用层

pub mod ads;

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use ads::{handler, AppState};

/// 构建应用路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ads", get(handler::list_ads).post(handler::create_ad))
        .route("/ads/:id", get(handler::get_ad))
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
