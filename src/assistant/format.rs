//! Pinecone Assistant URL 构建工具

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().trim_end_matches('/').to_string();

    // 修复双斜杠（跳过协议部分）
    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 数据平面基础 URL
///
/// describe 接口返回的 host 不带协议，这里补齐 https。
pub fn data_plane_url(host: &str) -> String {
    let host = host.trim();
    if host.starts_with("http://") || host.starts_with("https://") {
        fix_base_url(host)
    } else {
        fix_base_url(&format!("https://{}", host))
    }
}

/// 构建 describe 端点
pub fn build_describe_endpoint(controller_url: &str, assistant_name: &str) -> String {
    format!(
        "{}/assistant/assistants/{}",
        fix_base_url(controller_url),
        assistant_name
    )
}

/// 构建聊天端点
pub fn build_chat_endpoint(host: &str, assistant_name: &str) -> String {
    format!("{}/assistant/chat/{}", data_plane_url(host), assistant_name)
}

/// 构建文件上传端点
pub fn build_files_endpoint(host: &str, assistant_name: &str) -> String {
    format!("{}/assistant/files/{}", data_plane_url(host), assistant_name)
}
