//! Pinecone Assistant 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 图片附件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub data: String,
}

/// 发送给助手的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    /// 角色：user, assistant
    pub role: String,
    /// 消息内容
    pub content: String,
    /// 可选的图片
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImagePayload>,
}

impl AssistantMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            image: None,
        }
    }

    /// 附加图片数据
    pub fn with_image(mut self, data: impl Into<String>) -> Self {
        self.image = Some(ImagePayload { data: data.into() });
        self
    }
}

/// 回复消息
///
/// content 可能是字符串，也可能已经是结构化 JSON。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

/// token 用量
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// 聊天回复
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: ReplyMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatReply {
    /// 以给定 content 构造回复
    pub fn from_content(content: Value) -> Self {
        Self {
            message: ReplyMessage {
                role: Some("assistant".to_string()),
                content,
            },
            ..Default::default()
        }
    }
}

/// 助手描述信息
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantDescription {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    /// 数据平面 host
    #[serde(default)]
    pub host: Option<String>,
}

/// 文件上传结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub percent_done: Option<f64>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl fmt::Display for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id={}, status={})",
            self.name,
            self.id,
            self.status.as_deref().unwrap_or("unknown")
        )?;
        if let Some(created_on) = self.created_on {
            write!(f, " created_on={}", created_on.to_rfc3339())?;
        }
        Ok(())
    }
}

/// 助手错误类型
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API 返回错误
    #[error("Assistant API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 配置错误
    #[error("Assistant configuration error: {0}")]
    Config(String),

    /// JSON 解析错误
    #[error("Failed to parse assistant response: {0}")]
    Json(#[from] serde_json::Error),

    /// 文件读取错误
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
