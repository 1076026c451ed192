use serde_json::Value;

use crate::{
    client::GatewayClient,
    deepseek::types::{DeepSeekChatCompletionRequest, DeepSeekDefaults},
    error::LlmError,
    providers::DEEPSEEK,
    tools::{ChatTool, ChatToolFormat, ProviderToolFormat, Tool},
    types::{build_conversation, ResponseFormat},
};

/// Builder for DeepSeek chat completion requests
pub struct DeepSeekChatBuilder<'a> {
    client: &'a GatewayClient,
    model: String,
    message: Option<String>,
    system: Option<String>,
    defaults: DeepSeekDefaults,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    stream: Option<bool>,
    frequency_penalty: Option<f32>,
    presence_penalty: Option<f32>,
    top_p: Option<f32>,
    response_format: Option<ResponseFormat>,
    stop: Option<Vec<String>>,
    seed: Option<i64>,
    tools: Option<Vec<ChatTool>>,
}

impl<'a> DeepSeekChatBuilder<'a> {
    pub fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            model: DEEPSEEK.default_model.to_string(),
            message: None,
            system: None,
            defaults: DeepSeekDefaults::default(),
            temperature: None,
            max_tokens: None,
            stream: None,
            frequency_penalty: None,
            presence_penalty: None,
            top_p: None,
            response_format: None,
            stop: None,
            seed: None,
            tools: None,
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

    /// Replace the record used for parameters left unset
    pub fn defaults(mut self, defaults: DeepSeekDefaults) -> Self {
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

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
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

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the random seed for reproducible sampling
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tool(mut self, tool: Tool) -> Self {
        let tools = self.tools.get_or_insert_with(Vec::new);
        tools.push(ChatToolFormat::to_provider_tool(&tool));
        self
    }

    pub fn tools(mut self, tools: Vec<Tool>) -> Self {
        for tool in tools {
            self = self.tool(tool);
        }
        self
    }

    pub fn build(&self) -> Result<DeepSeekChatCompletionRequest, LlmError> {
        let message = self
            .message
            .as_deref()
            .ok_or_else(|| LlmError::invalid_request("message text must be specified"))?;

        Ok(DeepSeekChatCompletionRequest {
            messages: build_conversation(message, self.system.as_deref(), None),
            temperature: self.temperature.or(self.defaults.temperature),
            max_tokens: self.max_tokens.or(self.defaults.max_tokens),
            stream: self.stream.or(self.defaults.stream),
            frequency_penalty: self.frequency_penalty.or(self.defaults.frequency_penalty),
            presence_penalty: self.presence_penalty.or(self.defaults.presence_penalty),
            top_p: self.top_p.or(self.defaults.top_p),
            response_format: self.response_format.clone(),
            stop: self.stop.clone().filter(|s| !s.is_empty()),
            seed: self.seed,
            tools: self.tools.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Send the request and get the raw response body
    pub async fn send(self) -> Result<Value, LlmError> {
        let model = DEEPSEEK.model(&self.model)?;
        let request = self.build()?;
        self.client.dispatch(&DEEPSEEK, model, &request).await
    }
}

impl GatewayClient {
    /// Start building a DeepSeek chat completion request
    pub fn deepseek(&self) -> DeepSeekChatBuilder<'_> {
        DeepSeekChatBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use serde_json::json;

    fn client() -> GatewayClient {
        GatewayClient::new(GatewayConfig::new("k", "http://localhost:9").unwrap()).unwrap()
    }

    #[test]
    fn test_default_record_fills_sampling_params() {
        let client = client();
        let value = serde_json::to_value(client.deepseek().message("Hi").build().unwrap()).unwrap();
        assert_eq!(value["max_tokens"], json!(255));
        assert_eq!(value["stream"], json!(false));
        assert_eq!(value["top_p"], json!(1.0));
        assert!(value.get("stop").is_none());
        assert!(value.get("seed").is_none());
        assert!(value.get("tools").is_none());
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn test_unset_record_forwards_only_explicit_params() {
        let client = client();
        let request = client
            .deepseek()
            .defaults(DeepSeekDefaults::unset())
            .message("Hi")
            .max_tokens(64)
            .build()
            .unwrap();
        let value = serde_json::to_value(request).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(value["max_tokens"], json!(64));
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let client = client();
        let request = client
            .deepseek()
            .message("Hi")
            .system("Think step by step.")
            .temperature(0.9)
            .seed(42)
            .stop(vec!["END".to_string()])
            .response_format(ResponseFormat::json_object())
            .build()
            .unwrap();
        assert_eq!(request.temperature, Some(0.9));
        assert_eq!(request.seed, Some(42));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.stop, Some(vec!["END".to_string()]));
    }

    #[test]
    fn test_empty_stop_list_not_forwarded() {
        let client = client();
        let request = client.deepseek().message("Hi").stop(Vec::new()).build().unwrap();
        assert!(request.stop.is_none());
    }
}
