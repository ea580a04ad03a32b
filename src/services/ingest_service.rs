//! 文档导入
//!
//! 按顺序把本地 JSON 文档上传到助手的文档库。

use std::path::{Path, PathBuf};
use tracing::info;

use crate::assistant::{AssistantApi, AssistantError, UploadedFile};

/// 默认导入的文件
pub const DEFAULT_FILES: [&str; 2] = ["data/discourse.json", "data/tds_website.json"];

/// 默认文件列表
pub fn default_files() -> Vec<PathBuf> {
    DEFAULT_FILES.iter().map(PathBuf::from).collect()
}

/// 依次上传所有文件
///
/// 每上传成功一个文件就回调一次 `on_uploaded`。遇到第一个错误立即返回，
/// 剩余文件不再上传，也不重试。
pub async fn upload_all<P, F>(
    assistant: &dyn AssistantApi,
    paths: &[P],
    mut on_uploaded: F,
) -> Result<Vec<UploadedFile>, AssistantError>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &UploadedFile),
{
    let mut uploaded = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        info!("Uploading {} to assistant {}", path.display(), assistant.name());
        let file = assistant.upload_file(path).await?;
        on_uploaded(path, &file);
        uploaded.push(file);
    }

    Ok(uploaded)
}
