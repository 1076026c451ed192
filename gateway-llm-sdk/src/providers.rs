//! Provider descriptors
//!
//! The gateway routes every provider through `{base}/deployments/{model}/...`
//! but each one differs in path suffix, version placement, auth header and
//! timeout. Those differences live here as data; the dispatcher in
//! [`crate::client`] is shared.

use std::time::Duration;

use crate::{
    error::LlmError,
    models::{self, find_model, ModelDescriptor},
};

/// Where the model's API version goes on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPlacement {
    /// Appended as `?api-version={version}`
    Query,
    /// Not sent; the route pins the version
    Implicit,
}

/// How the API key is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `api-key: <key>`
    ApiKeyHeader,
    /// `Authorization: Bearer <key>`
    Bearer,
}

/// Routing and transport details for one provider
#[derive(Debug, Clone, Copy)]
pub struct ProviderDescriptor {
    pub name: &'static str,
    /// Path appended after `/deployments/{model}/`
    pub path_suffix: &'static str,
    pub version_placement: VersionPlacement,
    pub auth: AuthStyle,
    /// `None` leaves the request unbounded
    pub timeout: Option<Duration>,
    /// Also send `accept: application/json`
    pub accept_json: bool,
    pub models: &'static [ModelDescriptor],
    pub default_model: &'static str,
}

impl ProviderDescriptor {
    /// Resolve a model name against this provider's table
    pub fn model(&self, name: &str) -> Result<&'static ModelDescriptor, LlmError> {
        find_model(self.name, self.models, name)
    }

    /// Full request URL for `model` under `base_url`
    pub fn endpoint(&self, base_url: &str, model: &ModelDescriptor) -> String {
        let base = base_url.strip_suffix('/').unwrap_or(base_url);
        let url = format!("{}/deployments/{}/{}", base, model.id, self.path_suffix);
        match self.version_placement {
            VersionPlacement::Query => format!("{}?api-version={}", url, model.api_version),
            VersionPlacement::Implicit => url,
        }
    }
}

const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anthropic Claude, Messages-style route
pub const CLAUDE: ProviderDescriptor = ProviderDescriptor {
    name: "claude",
    path_suffix: "messages/",
    version_placement: VersionPlacement::Query,
    auth: AuthStyle::ApiKeyHeader,
    timeout: None,
    accept_json: false,
    models: models::claude::MODELS,
    default_model: models::claude::DEFAULT_MODEL,
};

/// OpenAI chat completions
pub const OPENAI: ProviderDescriptor = ProviderDescriptor {
    name: "openai",
    path_suffix: "chat/completions/",
    version_placement: VersionPlacement::Query,
    auth: AuthStyle::ApiKeyHeader,
    timeout: Some(CHAT_TIMEOUT),
    accept_json: false,
    models: models::openai::MODELS,
    default_model: models::openai::DEFAULT_MODEL,
};

/// Google Gemini generate-content
pub const GEMINI: ProviderDescriptor = ProviderDescriptor {
    name: "gemini",
    path_suffix: "generate_content",
    version_placement: VersionPlacement::Query,
    auth: AuthStyle::ApiKeyHeader,
    timeout: None,
    accept_json: true,
    models: models::gemini::MODELS,
    default_model: models::gemini::DEFAULT_MODEL,
};

/// Meta Llama completion
pub const LLAMA: ProviderDescriptor = ProviderDescriptor {
    name: "llama",
    path_suffix: "llama/completion/",
    version_placement: VersionPlacement::Query,
    auth: AuthStyle::ApiKeyHeader,
    timeout: None,
    accept_json: false,
    models: models::llama::MODELS,
    default_model: models::llama::DEFAULT_MODEL,
};

/// DeepSeek chat completions
pub const DEEPSEEK: ProviderDescriptor = ProviderDescriptor {
    name: "deepseek",
    path_suffix: "chat/completions/",
    version_placement: VersionPlacement::Query,
    auth: AuthStyle::ApiKeyHeader,
    timeout: Some(CHAT_TIMEOUT),
    accept_json: false,
    models: models::deepseek::MODELS,
    default_model: models::deepseek::DEFAULT_MODEL,
};

/// Alibaba Qwen chat completions (bearer auth, version implicit)
pub const QWEN: ProviderDescriptor = ProviderDescriptor {
    name: "qwen",
    path_suffix: "chat/completions",
    version_placement: VersionPlacement::Implicit,
    auth: AuthStyle::Bearer,
    timeout: None,
    accept_json: false,
    models: models::qwen::MODELS,
    default_model: models::qwen::DEFAULT_MODEL,
};
