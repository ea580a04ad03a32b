//! 助手模块
//!
//! 封装对 Pinecone Assistant 服务的调用：单轮聊天和文件上传。

mod client;
mod format;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AssistantApi, PineconeAssistant};
pub use types::*;
