//! 测试用的脚本化助手

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::client::AssistantApi;
use super::types::{AssistantError, AssistantMessage, ChatReply, UploadedFile};

/// 按顺序返回预设结果，并记录收到的调用
#[derive(Default)]
pub struct ScriptedAssistant {
    chat_replies: Mutex<VecDeque<Result<ChatReply, AssistantError>>>,
    upload_results: Mutex<VecDeque<Result<UploadedFile, AssistantError>>>,
    pub chat_calls: Mutex<Vec<Vec<AssistantMessage>>>,
    pub upload_calls: Mutex<Vec<PathBuf>>,
}

impl ScriptedAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chat_reply(self, reply: Result<ChatReply, AssistantError>) -> Self {
        self.chat_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_upload_result(self, result: Result<UploadedFile, AssistantError>) -> Self {
        self.upload_results.lock().unwrap().push_back(result);
        self
    }
}

/// 构造上传结果
pub fn uploaded(name: &str) -> UploadedFile {
    UploadedFile {
        id: format!("file-{}", name),
        name: name.to_string(),
        status: Some("Processing".to_string()),
        percent_done: Some(0.0),
        created_on: None,
        updated_on: None,
        metadata: None,
    }
}

#[async_trait]
impl AssistantApi for ScriptedAssistant {
    fn name(&self) -> &str {
        "scripted-assistant"
    }

    async fn chat(&self, messages: Vec<AssistantMessage>) -> Result<ChatReply, AssistantError> {
        self.chat_calls.lock().unwrap().push(messages);
        self.chat_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistantError::Config("no scripted reply".to_string())))
    }

    async fn upload_file(&self, path: &Path) -> Result<UploadedFile, AssistantError> {
        self.upload_calls.lock().unwrap().push(path.to_path_buf());
        self.upload_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistantError::Config("no scripted upload".to_string())))
    }
}
