//! 应用配置管理
//!
//! 从环境变量（以及可选的 `.env` 文件）加载配置。配置在启动时构建一次，
//! 之后以值的形式注入到各个组件中。

use std::net::SocketAddr;

use crate::error::AppError;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pinecone API 密钥
    pub api_key: String,

    /// 助手名称
    pub assistant_name: String,

    /// 控制平面 URL
    pub controller_url: String,

    /// 数据平面 host（为空时通过 describe 接口解析）
    pub assistant_host: Option<String>,

    /// API 版本头
    pub api_version: String,

    /// 聊天使用的模型
    pub chat_model: String,

    /// 请求超时（秒）
    pub request_timeout_secs: u64,

    /// 监听地址
    pub host: String,

    /// 监听端口
    pub port: u16,
}

fn default_assistant_name() -> String {
    "tds-virtual-assistant".to_string()
}

fn default_controller_url() -> String {
    "https://api.pinecone.io".to_string()
}

fn default_api_version() -> String {
    "2025-01".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            assistant_name: default_assistant_name(),
            controller_url: default_controller_url(),
            assistant_host: None,
            api_version: default_api_version(),
            chat_model: default_chat_model(),
            request_timeout_secs: default_request_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过查找函数加载配置
    ///
    /// 空字符串视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(api_key) = get("PINECONE_API_KEY").or_else(|| get("pinecone_api_key")) {
            config.api_key = api_key;
        }
        if let Some(name) = get("PINECONE_ASSISTANT_NAME") {
            config.assistant_name = name;
        }
        if let Some(url) = get("PINECONE_CONTROLLER_URL") {
            config.controller_url = url;
        }
        config.assistant_host = get("PINECONE_ASSISTANT_HOST");
        if let Some(version) = get("PINECONE_API_VERSION") {
            config.api_version = version;
        }
        if let Some(model) = get("PINECONE_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Some(timeout) = get("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.trim().parse().map_err(|e| {
                AppError::Config(format!("invalid REQUEST_TIMEOUT_SECS '{}': {}", timeout, e))
            })?;
        }
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("invalid PORT '{}': {}", port, e)))?;
        }

        Ok(config)
    }

    /// 要求 API 密钥已设置
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::Config(
                "PINECONE_API_KEY not found in environment variables!".to_string(),
            ));
        }
        Ok(&self.api_key)
    }

    /// 监听地址
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address: {}", e)))
    }
}
