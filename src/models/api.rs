//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 参考链接，例如 `{title, url}`
pub type Link = BTreeMap<String, String>;

/// 查询请求
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    /// 可选图片（通常为 base64）
    #[serde(default)]
    pub image: Option<String>,
}

/// 查询响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub links: Vec<Link>,
}

/// 探针响应
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub response: &'static str,
}
