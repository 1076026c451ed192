use serde::{Deserialize, Serialize};

use crate::{client::GatewayRequest, providers::ProviderDescriptor, types::Message};

pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_TOP_P: f32 = 1.0;
pub const DEFAULT_TOP_K: u32 = 50;

/// Llama completion request
///
/// The system prompt travels as a top-level field, not as a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlamaCompletionRequest {
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl GatewayRequest for LlamaCompletionRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::LLAMA
    }
}
