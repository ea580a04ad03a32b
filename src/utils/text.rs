//! 日志用的文本处理

use uuid::Uuid;

/// 生成请求 ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// 截断字符串（按字符计数）
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id = generate_request_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key("pcsk_1234567890abcd"), "pcsk...abcd");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        // 多字节字符不会在中间被截断
        assert_eq!(truncate("数据科学工具", 2), "数据...");
    }
}
