//! 文档导入工具
//!
//! 把本地 JSON 文档依次上传到 Pinecone Assistant。命令行参数给出的路径
//! 会替换默认文件列表。

use std::path::PathBuf;
use tracing::info;

use assistant_relay::assistant::PineconeAssistant;
use assistant_relay::config::AppConfig;
use assistant_relay::services::{default_files, upload_all};
use assistant_relay::utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("assistant_relay=info,ingest=info");

    let config = AppConfig::from_env()?;
    config.require_api_key()?;

    let assistant = PineconeAssistant::new(&config)?;

    let args: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let files = if args.is_empty() { default_files() } else { args };

    info!(
        "Uploading {} file(s) to assistant {}",
        files.len(),
        config.assistant_name
    );

    upload_all(&assistant, &files, |path, file| {
        println!("Uploaded {}: {}", path.display(), file);
    })
    .await?;

    Ok(())
}
