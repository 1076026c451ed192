use std::collections::HashMap;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::LlmError;

/// Environment variable holding the gateway API key
pub const API_KEY_VAR: &str = "HKBU_API_KEY";
/// Environment variable holding the gateway base URL
pub const BASE_URL_VAR: &str = "HKBU_BASIC_URL";

const ENV_PREFIX: &str = "HKBU";

/// Key names inside a configuration file
const API_KEY_FILE_KEY: &str = "api_key";
const BASE_URL_FILE_KEY: &str = "basic_url";

/// Credentials shared by every provider call
///
/// Built once at startup and handed to [`crate::client::GatewayClient`].
#[derive(Clone)]
pub struct GatewayConfig {
    api_key: String,
    base_url: String,
}

/// Shape of the layered sources before validation
#[derive(Debug, Default, Deserialize)]
struct RawGatewayConfig {
    api_key: Option<String>,
    basic_url: Option<String>,
}

impl GatewayConfig {
    /// Create a configuration from explicit values
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        Self::validate(RawGatewayConfig {
            api_key: Some(api_key.into()),
            basic_url: Some(base_url.into()),
        })
    }

    /// Read `HKBU_API_KEY` and `HKBU_BASIC_URL` from the process environment
    pub fn from_env() -> Result<Self, LlmError> {
        Self::build(None, None)
    }

    /// Read a TOML file (`api_key`, `basic_url`) with the environment layered on top
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        Self::build(Some(path.as_ref()), None)
    }

    /// Same as [`GatewayConfig::from_env`] but reading from the given variables
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, LlmError> {
        Self::build(None, Some(vars))
    }

    fn build(path: Option<&Path>, vars: Option<HashMap<String, String>>) -> Result<Self, LlmError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(vars));

        let raw: RawGatewayConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| LlmError::config(format!("Failed to read gateway configuration: {e}")))?;

        Self::validate(raw)
    }

    fn validate(raw: RawGatewayConfig) -> Result<Self, LlmError> {
        let api_key = raw.api_key.filter(|v| !v.trim().is_empty());
        let base_url = raw.basic_url.filter(|v| !v.trim().is_empty());

        match (api_key, base_url) {
            (Some(api_key), Some(base_url)) => Ok(Self { api_key, base_url }),
            (api_key, base_url) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(format!("{API_KEY_VAR} (file key `{API_KEY_FILE_KEY}`)"));
                }
                if base_url.is_none() {
                    missing.push(format!("{BASE_URL_VAR} (file key `{BASE_URL_FILE_KEY}`)"));
                }
                Err(LlmError::config(format!(
                    "Missing gateway settings: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
