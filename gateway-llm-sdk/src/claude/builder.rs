use serde_json::Value;

use crate::{
    claude::types::{ClaudeMessageRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE},
    client::GatewayClient,
    error::LlmError,
    providers::CLAUDE,
    types::build_conversation,
};

/// Builder for Claude requests
pub struct ClaudeMessageBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    image_url: Option<String>,
    temperature: f32,
    max_tokens: u32,
}

impl<'a> ClaudeMessageBuilder<'a> {
    /// Create a new message builder with the provider defaults
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: CLAUDE.default_model.to_string(),
            message: None,
            image_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the user message text
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// Attach an image reference to the user message
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the temperature for randomness
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Resolve the model and assemble the payload without sending it
    pub fn build(&self) -> Result<ClaudeMessageRequest, LlmError> {
        let message = self
            .message
            .as_deref()
            .ok_or_else(|| LlmError::invalid_request("message text must be specified"))?;

        Ok(ClaudeMessageRequest {
            messages: build_conversation(message, None, self.image_url.as_deref()),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = CLAUDE.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&CLAUDE, model, &request).await
    }
}

impl GatewayClient {
    /// Start building a Claude request
    pub fn claude(&self) -> ClaudeMessageBuilder<'_> {
        ClaudeMessageBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::GatewayConfig, error::LlmError, types::MessageContent};

    use super::*;

    fn client() -> GatewayClient {
        GatewayClient::new(GatewayConfig::new("test-key", "http://localhost:9").unwrap()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let client = client();
        let request = client.claude().message("Hello").build().unwrap();
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn test_image_request() {
        let client = client();
        let request = client
            .claude()
            .message("Describe")
            .image_url("https://img.example.com/a.png")
            .build()
            .unwrap();
        assert!(matches!(request.messages[0].content, MessageContent::Parts(ref p) if p.len() == 2));
    }

    #[test]
    fn test_missing_message() {
        let client = client();
        assert!(matches!(
            client.claude().build(),
            Err(LlmError::InvalidRequest { status: None, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_model_fails_before_network() {
        let client = client();
        let err = client
            .claude()
            .model("claude-2")
            .message("Hello")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ModelNotFound { .. }));
    }
}
