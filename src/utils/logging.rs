//! 日志初始化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing 订阅器
///
/// 优先使用 `RUST_LOG`，否则使用给定的默认过滤规则。
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
