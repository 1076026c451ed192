use serde::{Deserialize, Serialize};

use crate::{
    client::GatewayRequest,
    providers::ProviderDescriptor,
    tools::ChatTool,
    types::{Message, ResponseFormat},
};

/// Generation parameters applied when the caller leaves them unset
///
/// `None` means the parameter is not forwarded at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepSeekDefaults {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub stream: Option<bool>,
    pub frequency_penalty: Option<f32>,
    pub presence_penalty: Option<f32>,
    pub top_p: Option<f32>,
}

impl Default for DeepSeekDefaults {
    fn default() -> Self {
        Self {
            temperature: Some(0.0),
            max_tokens: Some(255),
            stream: Some(false),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
            top_p: Some(1.0),
        }
    }
}

impl DeepSeekDefaults {
    /// Forward only what the caller sets explicitly
    pub fn unset() -> Self {
        Self {
            temperature: None,
            max_tokens: None,
            stream: None,
            frequency_penalty: None,
            presence_penalty: None,
            top_p: None,
        }
    }
}

/// DeepSeek chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekChatCompletionRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ChatTool>>,
}

impl GatewayRequest for DeepSeekChatCompletionRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::DEEPSEEK
    }
}
