use serde_json::Value;

use crate::{
    client::GatewayClient,
    error::LlmError,
    openai::types::{OpenAIChatCompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE},
    providers::OPENAI,
    tools::{ChatTool, ChatToolFormat, ProviderToolFormat, Tool},
    types::{build_conversation, ResponseFormat},
};

/// Builder for OpenAI chat completion requests
pub struct OpenAIChatBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    image_url: Option<String>,
    system: Option<String>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
    tools: Option<Vec<ChatTool>>,
    response_format: Option<ResponseFormat>,
}

impl<'a> OpenAIChatBuilder<'a> {
    /// Create a new builder with the provider defaults
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: OPENAI.default_model.to_string(),
            message: None,
            image_url: None,
            system: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            stream: false,
            tools: None,
            response_format: None,
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

    /// Attach an image reference for vision models
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the system message
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
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

    /// Set the streaming flag sent to the gateway
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Add a tool to the request
    pub fn tool(mut self, tool: Tool) -> Self {
        let tools = self.tools.get_or_insert_with(Vec::new);
        tools.push(ChatToolFormat::to_provider_tool(&tool));
        self
    }

    /// Add multiple tools to the request
    pub fn tools(mut self, tools: Vec<Tool>) -> Self {
        for tool in tools {
            self = self.tool(tool);
        }
        self
    }

    /// Request a response format such as `json_object`
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Assemble the payload without sending it
    pub fn build(&self) -> Result<OpenAIChatCompletionRequest, LlmError> {
        let message = self
            .message
            .as_deref()
            .ok_or_else(|| LlmError::invalid_request("message text must be specified"))?;

        Ok(OpenAIChatCompletionRequest {
            messages: build_conversation(
                message,
                self.system.as_deref(),
                self.image_url.as_deref(),
            ),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: self.stream,
            // An empty tool list is not forwarded
            tools: self.tools.clone().filter(|t| !t.is_empty()),
            response_format: self.response_format.clone(),
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = OPENAI.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&OPENAI, model, &request).await
    }
}

impl GatewayClient {
    /// Start building an OpenAI chat completion request
    pub fn openai(&self) -> OpenAIChatBuilder<'_> {
        OpenAIChatBuilder::new(self)
    }
}
