//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::assistant::AssistantApi;

/// 应用共享状态
///
/// 启动时构建一次，进程结束前不再修改。
#[derive(Clone)]
pub struct AppState {
    /// 助手客户端
    pub assistant: Arc<dyn AssistantApi>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(assistant: Arc<dyn AssistantApi>) -> Self {
        Self { assistant }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(assistant: Arc<dyn AssistantApi>) -> Arc<AppState> {
    Arc::new(AppState::new(assistant))
}
