//! TDS Virtual Assistant relay - 查询服务
//!
//! 使用 axum 框架构建的后端服务，把问题转发给 Pinecone Assistant。

use std::sync::Arc;
use tracing::{info, warn};

use assistant_relay::api::create_app;
use assistant_relay::assistant::PineconeAssistant;
use assistant_relay::config::AppConfig;
use assistant_relay::state::create_shared_state;
use assistant_relay::utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可选，变量也可能直接来自运行环境
    dotenvy::dotenv().ok();

    // 初始化日志
    init_tracing("assistant_relay=info,tower_http=debug");

    info!("Starting TDS Virtual Assistant relay...");

    let config = AppConfig::from_env()?;
    if config.api_key.is_empty() {
        warn!("PINECONE_API_KEY is not set; every query will fail until it is configured");
    }

    // 创建共享状态
    let assistant = PineconeAssistant::new(&config)?;
    let state = create_shared_state(Arc::new(assistant));

    let app = create_app(state);

    let addr = config.bind_addr()?;
    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
