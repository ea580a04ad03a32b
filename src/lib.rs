//! TDS Virtual Assistant relay
//!
//! 把用户问题转发给 Pinecone Assistant，并把回复整理为 `{answer, links}` 返回。
//! 同时提供把本地文档上传到助手的导入功能。

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
