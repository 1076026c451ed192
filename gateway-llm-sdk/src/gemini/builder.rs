use serde_json::Value;

use crate::{
    client::GatewayClient,
    error::LlmError,
    gemini::types::{user_content, GeminiGenerateContentRequest, GenerationConfig},
    providers::GEMINI,
};

/// Builder for Gemini generate-content requests
pub struct GeminiMessageBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    generation_config: GenerationConfig,
}

impl<'a> GeminiMessageBuilder<'a> {
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: GEMINI.default_model.to_string(),
            message: None,
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the user message text
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config.temperature = temperature;
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config.max_output_tokens = max_output_tokens;
        self
    }

    /// e.g. `application/json` or `text/x.enum`
    pub fn response_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.generation_config.response_mime_type = mime_type.into();
        self
    }

    /// Constrain the output with a raw response schema
    pub fn response_schema(mut self, schema: Value) -> Self {
        self.generation_config.response_schema = Some(schema);
        self
    }

    pub fn build(&self) -> Result<GeminiGenerateContentRequest, LlmError> {
        let message = self
            .message
            .as_deref()
            .ok_or_else(|| LlmError::invalid_request("message text must be specified"))?;

        Ok(GeminiGenerateContentRequest {
            contents: user_content(message),
            generation_config: self.generation_config.clone(),
            stream: false,
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = GEMINI.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&GEMINI, model, &request).await
    }
}

impl GatewayClient {
    /// Start building a Gemini request
    pub fn gemini(&self) -> GeminiMessageBuilder<'_> {
        GeminiMessageBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use serde_json::json;

    #[test]
    fn test_builder_overrides() {
        let client =
            GatewayClient::new(GatewayConfig::new("k", "http://localhost:9").unwrap()).unwrap();
        let request = client
            .gemini()
            .message("Is water wet?")
            .temperature(0.0)
            .max_output_tokens(5)
            .response_mime_type("text/x.enum")
            .response_schema(json!({"type": "STRING", "enum": ["yes", "no"]}))
            .build()
            .unwrap();

        assert_eq!(request.generation_config.max_output_tokens, 5);
        assert_eq!(request.generation_config.temperature, 0.0);
        assert_eq!(request.generation_config.response_mime_type, "text/x.enum");
        assert!(request.generation_config.response_schema.is_some());
        assert!(!request.stream);
    }
}
