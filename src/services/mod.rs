//! 服务层模块

pub mod ingest_service;
mod query_service;

pub use ingest_service::{default_files, upload_all};
pub use query_service::{parse_answer, QueryService};
