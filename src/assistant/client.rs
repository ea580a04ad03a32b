//! Pinecone Assistant 客户端

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use super::format::{build_chat_endpoint, build_describe_endpoint, build_files_endpoint};
use super::types::{AssistantDescription, AssistantError, AssistantMessage, ChatReply, UploadedFile};
use crate::config::AppConfig;
use crate::utils::{mask_api_key, truncate};

/// 助手能力抽象
///
/// 查询处理器和导入任务都只依赖这个 trait，测试时可以替换为脚本化的实现。
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// 助手名称
    fn name(&self) -> &str;

    /// 单轮聊天
    async fn chat(&self, messages: Vec<AssistantMessage>) -> Result<ChatReply, AssistantError>;

    /// 上传文件到助手的文档库
    async fn upload_file(&self, path: &Path) -> Result<UploadedFile, AssistantError>;
}

/// 聊天请求载荷
#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [AssistantMessage],
    stream: bool,
    model: &'a str,
}

/// Pinecone Assistant REST 客户端
pub struct PineconeAssistant {
    client: Client,
    api_key: String,
    assistant_name: String,
    controller_url: String,
    api_version: String,
    model: String,
    host: OnceCell<String>,
}

impl PineconeAssistant {
    /// 创建新的客户端
    ///
    /// API 密钥为空时仍可创建，但每次调用都会返回配置错误。
    pub fn new(config: &AppConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()?;

        if !config.api_key.is_empty() {
            info!(
                "Pinecone assistant client: name={}, api_key={}",
                config.assistant_name,
                mask_api_key(&config.api_key)
            );
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            assistant_name: config.assistant_name.clone(),
            controller_url: config.controller_url.clone(),
            api_version: config.api_version.clone(),
            model: config.chat_model.clone(),
            host: OnceCell::new_with(config.assistant_host.clone()),
        })
    }

    fn api_key(&self) -> Result<&str, AssistantError> {
        if self.api_key.is_empty() {
            return Err(AssistantError::Config(
                "PINECONE_API_KEY is not set".to_string(),
            ));
        }
        Ok(&self.api_key)
    }

    /// 添加鉴权和版本请求头
    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, AssistantError> {
        Ok(request
            .header("Api-Key", self.api_key()?)
            .header("X-Pinecone-API-Version", &self.api_version))
    }

    /// 检查状态码，非 2xx 转为 API 错误
    async fn check_status(response: Response) -> Result<Response, AssistantError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        error!(
            "Pinecone API error: status={}, body={}",
            status_code,
            truncate(&error_text, 500)
        );
        Err(AssistantError::Api {
            status: status_code,
            message: error_text,
        })
    }

    /// 查询助手描述
    pub async fn describe(&self) -> Result<AssistantDescription, AssistantError> {
        let endpoint = build_describe_endpoint(&self.controller_url, &self.assistant_name);
        debug!("Pinecone describe request: endpoint={}", endpoint);

        let response = self.authorized(self.client.get(&endpoint))?.send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// 数据平面 host，首次使用时解析并缓存
    async fn data_plane_host(&self) -> Result<&str, AssistantError> {
        let host = self
            .host
            .get_or_try_init(|| async {
                let description = self.describe().await?;
                info!(
                    "Resolved assistant host: name={}, status={}",
                    description.name,
                    description.status.as_deref().unwrap_or("unknown")
                );
                description.host.ok_or_else(|| {
                    AssistantError::Config(format!(
                        "assistant '{}' has no data plane host",
                        self.assistant_name
                    ))
                })
            })
            .await?;
        Ok(host.as_str())
    }
}

/// 根据扩展名推断 MIME 类型
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl AssistantApi for PineconeAssistant {
    fn name(&self) -> &str {
        &self.assistant_name
    }

    async fn chat(&self, messages: Vec<AssistantMessage>) -> Result<ChatReply, AssistantError> {
        self.api_key()?;
        let host = self.data_plane_host().await?;
        let endpoint = build_chat_endpoint(host, &self.assistant_name);

        let payload = ChatRequest {
            messages: &messages,
            stream: false,
            model: &self.model,
        };

        debug!(
            "Pinecone chat request: endpoint={}, model={}, messages={}",
            endpoint,
            self.model,
            messages.len()
        );

        let response = self
            .authorized(self.client.post(&endpoint))?
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn upload_file(&self, path: &Path) -> Result<UploadedFile, AssistantError> {
        self.api_key()?;
        let bytes = tokio::fs::read(path).await.map_err(|source| AssistantError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.json".to_string());

        let host = self.data_plane_host().await?;
        let endpoint = build_files_endpoint(host, &self.assistant_name);
        debug!(
            "Pinecone upload request: endpoint={}, file={}, bytes={}",
            endpoint,
            file_name,
            bytes.len()
        );

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(path))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .authorized(self.client.post(&endpoint))?
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
