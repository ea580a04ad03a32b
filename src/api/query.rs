//! 查询端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{error, info_span, Instrument};

use crate::error::AppResult;
use crate::models::{QueryRequest, QueryResponse};
use crate::services::QueryService;
use crate::state::AppState;
use crate::utils::generate_request_id;

/// 处理查询
async fn process_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    let span = info_span!("query", request_id = %generate_request_id());
    let service = QueryService::new(Arc::clone(&state.assistant));

    match service.answer(&req).instrument(span).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Exception in process_query: {}", e);
            Err(e)
        }
    }
}

/// 创建查询路由
pub fn query_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/", post(process_query))
}
