//! 探针端点

use axum::{routing::get, Json, Router};

use crate::models::ProbeResponse;
use crate::state::AppState;
use std::sync::Arc;

/// 测试端点
async fn api_test() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        response: "Test Done",
    })
}

/// 根路径
async fn home() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        response: "Who are u?",
    })
}

/// 创建探针路由
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/api/test", get(api_test))
}
