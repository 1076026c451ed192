use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{client::GatewayRequest, providers::ProviderDescriptor};

pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 10;
pub const DEFAULT_RESPONSE_MIME_TYPE: &str = "application/json";

/// Gemini API role enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
    Model,
}

/// A text part within content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeminiPart {
    pub text: String,
}

/// Content object representing a turn in conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeminiContent {
    pub role: GeminiRole,
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: GeminiRole::User,
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

/// Generation configuration parameters
///
/// The gateway expects camelCase for the token limit but snake_case for the
/// response hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            response_mime_type: DEFAULT_RESPONSE_MIME_TYPE.to_string(),
            response_schema: None,
        }
    }
}

/// Request body for generate_content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiGenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    pub stream: bool,
}

impl GatewayRequest for GeminiGenerateContentRequest {
    fn provider() -> &'static ProviderDescriptor {
        &crate::providers::GEMINI
    }
}

/// Single user turn in Gemini's content shape
pub fn user_content(text: &str) -> Vec<GeminiContent> {
    vec![GeminiContent::user(text)]
}
