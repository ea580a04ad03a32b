//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。
//! 所有错误都以 500 状态码和 `detail` 字段返回给客户端。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assistant::AssistantError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 助手返回的字符串不是合法 JSON
    #[error("Assistant response was not valid JSON: {0}")]
    UpstreamNotJson(String),

    /// 助手返回的内容不是对象
    #[error("Assistant response missing or not a dict: {0}")]
    UpstreamNotObject(String),

    /// 助手返回的对象缺少 answer 或 links
    #[error("Assistant response missing 'answer' or 'links': {0}")]
    UpstreamMissingFields(String),

    /// 其他处理错误（网络、鉴权、结构校验等）
    #[error("{0}")]
    Processing(String),
}

impl AppError {
    /// 返回给客户端的 detail 文本
    pub fn detail(&self) -> String {
        format!("Error processing query: {}", self)
    }
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        AppError::Processing(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "detail": self.detail()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
