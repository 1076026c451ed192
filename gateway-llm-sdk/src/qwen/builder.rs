use serde_json::Value;

use crate::{
    client::GatewayClient,
    error::LlmError,
    providers::QWEN,
    qwen::types::{QwenChatCompletionRequest, QwenDefaults},
    types::{build_conversation, Message},
};

/// Builder for Qwen chat completion requests
///
/// Takes either a single user message (with optional system message) or a
/// full caller-supplied history via [`QwenChatBuilder::messages`].
pub struct QwenChatBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    system: Option<String>,
    history: Option<Vec<Message>>,
    defaults: QwenDefaults,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    top_p: Option<f32>,
    frequency_penalty: Option<f32>,
    presence_penalty: Option<f32>,
}

impl<'a> QwenChatBuilder<'a> {
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: QWEN.default_model.to_string(),
            message: None,
            system: None,
            history: None,
            defaults: QwenDefaults::default(),
            temperature: None,
            max_tokens: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
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

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Send this history verbatim instead of a built conversation
    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.history = Some(messages);
        self
    }

    /// Replace the record used for parameters left unset
    pub fn defaults(mut self, defaults: QwenDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn build(&self) -> Result<QwenChatCompletionRequest, LlmError> {
        let messages = match (&self.history, self.message.as_deref()) {
            (Some(history), _) if !history.is_empty() => history.clone(),
            (_, Some(message)) => build_conversation(message, self.system.as_deref(), None),
            _ => {
                return Err(LlmError::invalid_request(
                    "message text or a message history must be specified",
                ))
            }
        };

        Ok(QwenChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature.or(self.defaults.temperature),
            max_tokens: self.max_tokens.or(self.defaults.max_tokens),
            top_p: self.top_p.or(self.defaults.top_p),
            frequency_penalty: self.frequency_penalty.or(self.defaults.frequency_penalty),
            presence_penalty: self.presence_penalty.or(self.defaults.presence_penalty),
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = QWEN.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&QWEN, model, &request).await
    }
}

impl GatewayClient {
    /// Start building a Qwen chat completion request
    pub fn qwen(&self) -> QwenChatBuilder<'_> {
        QwenChatBuilder::new(self)
    }
}
