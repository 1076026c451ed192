use thiserror::Error;

/// Errors produced while configuring, validating or dispatching a gateway request
#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or invalid gateway configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Requested model is not registered for the provider
    #[error("Model '{model}' not found in {provider} models (available: {})", .available.join(", "))]
    ModelNotFound {
        provider: String,
        model: String,
        available: Vec<String>,
    },

    /// Invalid request parameters, either caught locally or rejected with HTTP 400
    #[error("Invalid request{}: {message}", status_suffix(.status))]
    InvalidRequest {
        status: Option<u16>,
        message: String,
    },

    /// Authentication failed (HTTP 401/403) or the API key is unusable
    #[error("Authentication failed{}: {message}", status_suffix(.status))]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded (status 429): {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    /// Any other non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON, or a payload failed to serialize
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" (status {code})"))
        .unwrap_or_default()
}

impl LlmError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an authentication error that did not come from an HTTP response
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            status: None,
            message: message.into(),
        }
    }

    /// Create an invalid request error that did not come from an HTTP response
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            status: None,
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit<S: Into<String>>(message: S, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create an API error
    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Create a model-not-found error listing the provider's registered ids
    pub fn model_not_found(provider: &str, model: &str, available: &[&str]) -> Self {
        Self::ModelNotFound {
            provider: provider.to_string(),
            model: model.to_string(),
            available: available.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Map a non-success HTTP status and its body text to an error
    pub fn from_status(status: u16, body: String, retry_after: Option<u64>) -> Self {
        match status {
            400 => Self::InvalidRequest {
                status: Some(status),
                message: body,
            },
            401 | 403 => Self::Authentication {
                status: Some(status),
                message: body,
            },
            429 => Self::rate_limit(body, retry_after),
            _ => Self::api_error(status, body),
        }
    }

    /// HTTP status code carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { status, .. } | Self::Authentication { status, .. } => *status,
            Self::RateLimit { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Network { source } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the error was raised before any request left the process
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ModelNotFound { .. } | Self::InvalidRequest { status: None, .. }
        )
    }
}
