use serde::{Deserialize, Serialize};

use crate::{client::GatewayRequest, providers::ProviderDescriptor, types::Message};

/// Generation parameters applied when the caller leaves them unset
///
/// `None` means the parameter is not forwarded at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QwenDefaults {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub frequency_penalty: Option<f32>,
    pub presence_penalty: Option<f32>,
}

impl Default for QwenDefaults {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: Some(512),
            top_p: Some(1.0),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
        }
    }
}

impl QwenDefaults {
    /// Forward only what the caller sets explicitly
    pub fn unset() -> Self {
        Self {
            temperature: None,
            max_tokens: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        }
    }
}

/// Qwen chat completion request; the model is repeated in the body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QwenChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
}

impl GatewayRequest for QwenChatCompletionRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::QWEN
    }

    fn model(&self) -> Option<&str> {
        Some(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_in_body_and_unset_omitted() {
        let request = QwenChatCompletionRequest {
            model: "qwen-plus".to_string(),
            messages: vec![Message::user("Hi")],
            temperature: None,
            max_tokens: Some(512),
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "qwen-plus",
                "messages": [{"role": "user", "content": "Hi"}],
                "max_tokens": 512
            })
        );
    }
}
