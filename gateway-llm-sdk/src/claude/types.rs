use serde::{Deserialize, Serialize};

use crate::{client::GatewayRequest, providers::ProviderDescriptor, types::Message};

pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Claude message request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessageRequest {
    /// Input messages (a single user turn)
    pub messages: Vec<Message>,
    /// Temperature for randomness
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl GatewayRequest for ClaudeMessageRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::CLAUDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::build_conversation;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = ClaudeMessageRequest {
            messages: build_conversation("Hi", None, None),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "messages": [{"role": "user", "content": "Hi"}],
                "temperature": 0.0,
                "max_tokens": 100
            })
        );
    }
}
