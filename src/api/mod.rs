//! API 路由模块

mod health;
mod query;

pub use health::health_routes;
pub use query::query_routes;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(query_routes())
        .with_state(state)
}

/// 创建完整应用（路由 + CORS + 访问日志）
///
/// CORS 允许任意来源、方法、请求头，并允许携带凭证。
pub fn create_app(state: Arc<AppState>) -> Router {
    create_api_routes(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
