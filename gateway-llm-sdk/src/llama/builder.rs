use serde_json::Value;

use crate::{
    client::GatewayClient,
    error::LlmError,
    llama::types::{
        LlamaCompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_K,
        DEFAULT_TOP_P,
    },
    providers::LLAMA,
    types::build_conversation,
};

/// Builder for Llama completion requests
pub struct LlamaCompletionBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    image_url: Option<String>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    top_k: u32,
    stop_sequences: Option<Vec<String>>,
    stream: bool,
    system: Option<String>,
}

impl<'a> LlamaCompletionBuilder<'a> {
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: LLAMA.default_model.to_string(),
            message: None,
            image_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            stop_sequences: None,
            stream: false,
            system: None,
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

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the nucleus sampling threshold
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Set the system-level instructions
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn build(&self) -> Result<LlamaCompletionRequest, LlmError> {
        let message = self
            .message
            .as_deref()
            .ok_or_else(|| LlmError::invalid_request("message text must be specified"))?;

        Ok(LlamaCompletionRequest {
            messages: build_conversation(message, None, self.image_url.as_deref()),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
            top_k: self.top_k,
            stop_sequences: self.stop_sequences.clone(),
            stream: self.stream,
            system: self.system.clone(),
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = LLAMA.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&LLAMA, model, &request).await
    }
}

impl GatewayClient {
    /// Start building a Llama completion request
    pub fn llama(&self) -> LlamaCompletionBuilder<'_> {
        LlamaCompletionBuilder::new(self)
    }
}
