use serde::{Deserialize, Serialize};

use crate::{
    client::GatewayRequest,
    providers::ProviderDescriptor,
    tools::ChatTool,
    types::{Message, ResponseFormat},
};

pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// OpenAI chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChatCompletionRequest {
    /// Optional system message followed by one user message
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Forwarded as-is; the response is still read as one body
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ChatTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl GatewayRequest for OpenAIChatCompletionRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::OPENAI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::build_conversation;
    use serde_json::json;

    #[test]
    fn test_optional_fields_omitted() {
        let request = OpenAIChatCompletionRequest {
            messages: build_conversation("Hi", None, None),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            stream: false,
            tools: None,
            response_format: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [{"role": "user", "content": "Hi"}],
                "temperature": 0.0,
                "max_tokens": 100,
                "stream": false
            })
        );
    }

    #[test]
    fn test_response_format_included_when_set() {
        let request = OpenAIChatCompletionRequest {
            messages: build_conversation("Hi", None, None),
            temperature: 0.2,
            max_tokens: 10,
            stream: true,
            tools: None,
            response_format: Some(ResponseFormat::json_object()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"], json!({"type": "json_object"}));
        assert_eq!(value["stream"], json!(true));
        assert!(value.get("tools").is_none());
    }
}
