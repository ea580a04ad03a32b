//! 查询服务
//!
//! 把用户问题转发给助手，并把助手回复校验为结构化的 QueryResponse。

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::assistant::{AssistantApi, AssistantMessage};
use crate::error::{AppError, AppResult};
use crate::models::{QueryRequest, QueryResponse};
use crate::utils::truncate;

/// 图片日志预览长度
const IMAGE_PREVIEW_CHARS: usize = 100;

/// 查询服务
pub struct QueryService {
    assistant: Arc<dyn AssistantApi>,
}

impl QueryService {
    pub fn new(assistant: Arc<dyn AssistantApi>) -> Self {
        Self { assistant }
    }

    /// 构建发送给助手的消息
    pub fn build_message(request: &QueryRequest) -> AssistantMessage {
        let message = AssistantMessage::user(request.question.as_str());
        match &request.image {
            Some(image) => message.with_image(image.as_str()),
            None => message,
        }
    }

    /// 处理一次查询
    ///
    /// 每次调用都是独立的单消息会话，不保留历史。
    pub async fn answer(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
        info!("Assistant name: {}", self.assistant.name());
        info!("Received question: {}", request.question);
        if let Some(image) = &request.image {
            info!("Received image (truncated): {}", truncate(image, IMAGE_PREVIEW_CHARS));
        }

        let message = Self::build_message(request);
        let reply = self.assistant.chat(vec![message]).await?;

        info!(
            "Raw assistant response: {}",
            serde_json::to_string(&reply).unwrap_or_else(|_| format!("{:?}", reply))
        );
        debug!("Raw content: {}", reply.message.content);

        parse_answer(reply.message.content)
    }
}

/// 把助手回复的 content 校验为 QueryResponse
///
/// 字符串 content 先按 JSON 解析；结果必须是非空对象且同时包含
/// `answer` 和 `links`。字段类型由 QueryResponse 严格约束，不做类型转换。
pub fn parse_answer(content: Value) -> AppResult<QueryResponse> {
    let payload = match content {
        Value::String(raw) => {
            serde_json::from_str::<Value>(&raw).map_err(|_| AppError::UpstreamNotJson(raw))?
        }
        other => other,
    };

    match &payload {
        Value::Object(map) if !map.is_empty() => {
            if !map.contains_key("answer") || !map.contains_key("links") {
                return Err(AppError::UpstreamMissingFields(payload.to_string()));
            }
        }
        _ => return Err(AppError::UpstreamNotObject(payload.to_string())),
    }

    serde_json::from_value(payload)
        .map_err(|e| AppError::Processing(format!("invalid assistant response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::testing::ScriptedAssistant;
    use crate::assistant::{AssistantError, ChatReply};
    use serde_json::json;

    fn request(question: &str, image: Option<&str>) -> QueryRequest {
        QueryRequest {
            question: question.to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_build_message() {
        let message = QueryService::build_message(&request("What is GA4?", None));
        assert_eq!(message, AssistantMessage::user("What is GA4?"));

        let message = QueryService::build_message(&request("Which model?", Some("aGVsbG8=")));
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "Which model?");
        assert_eq!(message.image.unwrap().data, "aGVsbG8=");
    }

    #[test]
    fn test_parse_structured_content() {
        let content = json!({
            "answer": "Use gpt-3.5-turbo-0125.",
            "links": [
                {"url": "https://discourse.onlinedegree.iitm.ac.in/t/155939", "text": "Use the model mentioned in the question."}
            ]
        });
        let response = parse_answer(content).unwrap();
        assert_eq!(response.answer, "Use gpt-3.5-turbo-0125.");
        assert_eq!(response.links.len(), 1);
        assert_eq!(
            response.links[0].get("url").map(String::as_str),
            Some("https://discourse.onlinedegree.iitm.ac.in/t/155939")
        );
    }

    #[test]
    fn test_parse_string_content() {
        let response = parse_answer(json!("{\"answer\":\"x\",\"links\":[]}")).unwrap();
        assert_eq!(
            response,
            QueryResponse {
                answer: "x".to_string(),
                links: vec![],
            }
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_answer(json!("not json")).unwrap_err();
        assert!(matches!(err, AppError::UpstreamNotJson(ref raw) if raw == "not json"));
        assert!(err.detail().contains("not valid JSON"));
    }

    #[test]
    fn test_parse_not_object() {
        for content in [json!(null), json!([1, 2]), json!("[1, 2]"), json!("42"), json!({})] {
            let err = parse_answer(content).unwrap_err();
            assert!(matches!(err, AppError::UpstreamNotObject(_)));
        }
    }

    #[test]
    fn test_parse_missing_fields() {
        let err = parse_answer(json!({"answer": "x"})).unwrap_err();
        assert!(matches!(err, AppError::UpstreamMissingFields(_)));
        assert!(err.detail().contains("missing 'answer' or 'links'"));
        assert!(err.detail().contains("\"answer\":\"x\""));

        let err = parse_answer(json!("{\"links\": []}")).unwrap_err();
        assert!(matches!(err, AppError::UpstreamMissingFields(_)));
    }

    #[test]
    fn test_parse_rejects_non_string_link_values() {
        let err = parse_answer(json!({"answer": "x", "links": [{"url": "u", "rank": 1}]})).unwrap_err();
        assert!(matches!(err, AppError::Processing(_)));

        let err = parse_answer(json!({"answer": 5, "links": []})).unwrap_err();
        assert!(matches!(err, AppError::Processing(_)));
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let response = parse_answer(json!({"answer": "x", "links": [], "confidence": 0.9})).unwrap();
        assert_eq!(response.answer, "x");
    }

    #[tokio::test]
    async fn test_answer_sends_single_message() {
        let assistant = Arc::new(ScriptedAssistant::new().with_chat_reply(Ok(
            ChatReply::from_content(json!({"answer": "A", "links": [{"title": "t", "url": "u"}]})),
        )));
        let service = QueryService::new(assistant.clone());

        let response = service
            .answer(&request("question?", Some("aW1hZ2U=")))
            .await
            .unwrap();
        assert_eq!(response.answer, "A");
        assert_eq!(response.links[0].get("title").map(String::as_str), Some("t"));

        let calls = assistant.chat_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].image.as_ref().unwrap().data, "aW1hZ2U=");
    }

    #[tokio::test]
    async fn test_answer_is_stateless() {
        let assistant = Arc::new(
            ScriptedAssistant::new()
                .with_chat_reply(Ok(ChatReply::from_content(json!({"answer": "1", "links": []}))))
                .with_chat_reply(Ok(ChatReply::from_content(json!({"answer": "2", "links": []})))),
        );
        let service = QueryService::new(assistant.clone());

        service.answer(&request("first", None)).await.unwrap();
        service.answer(&request("second", None)).await.unwrap();

        let calls = assistant.chat_calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], vec![AssistantMessage::user("second")]);
    }

    #[tokio::test]
    async fn test_answer_propagates_assistant_error() {
        let assistant = Arc::new(ScriptedAssistant::new().with_chat_reply(Err(AssistantError::Api {
            status: 504,
            message: "upstream request timeout".to_string(),
        })));
        let service = QueryService::new(assistant);

        let err = service.answer(&request("q", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Processing(_)));
        assert!(err.detail().contains("upstream request timeout"));
    }
}
