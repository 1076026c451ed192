use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::GatewayConfig,
    error::LlmError,
    models::ModelDescriptor,
    providers::{AuthStyle, ProviderDescriptor},
};

/// A typed request body bound to one provider
///
/// Implemented by every provider's payload struct so that a hand-built
/// payload can go through [`GatewayClient::send`].
pub trait GatewayRequest: Serialize {
    fn provider() -> &'static ProviderDescriptor;

    /// Model named inside the body, for providers that repeat it there
    fn model(&self) -> Option<&str> {
        None
    }
}

/// Client for the deployment-routed gateway
///
/// Holds the credentials and a reusable HTTP client. Every call issues exactly
/// one POST; nothing is retried.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    config: Arc<GatewayConfig>,
    http_client: reqwest::Client,
}

impl GatewayClient {
    /// Create a client for the given configuration
    pub fn new(config: GatewayConfig) -> Result<Self, LlmError> {
        Self::with_shared_config(Arc::new(config))
    }

    /// Create a client that shares an already-built configuration
    pub fn with_shared_config(config: Arc<GatewayConfig>) -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client from `HKBU_API_KEY` / `HKBU_BASIC_URL`
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GatewayConfig::from_env()?)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Resolve `model` for the request's provider and dispatch `request`
    pub async fn send<R: GatewayRequest>(&self, model: &str, request: &R) -> Result<Value, LlmError> {
        let provider = R::provider();
        let model = provider.model(model)?;
        if let Some(body_model) = request.model() {
            if body_model != model.id {
                return Err(LlmError::invalid_request(format!(
                    "Request body names model '{}' but the route targets '{}'",
                    body_model, model.id
                )));
            }
        }
        self.dispatch(provider, model, request).await
    }

    fn headers(&self, provider: &ProviderDescriptor) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if provider.accept_json {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        match provider.auth {
            AuthStyle::ApiKeyHeader => {
                headers.insert(
                    "api-key",
                    HeaderValue::from_str(self.config.api_key())
                        .map_err(|_| LlmError::authentication("Invalid API key format"))?,
                );
            }
            AuthStyle::Bearer => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", self.config.api_key()))
                        .map_err(|_| LlmError::authentication("Invalid API key format"))?,
                );
            }
        }

        Ok(headers)
    }

    /// POST `payload` to the provider's deployment route and normalize the response
    ///
    /// 2xx returns the decoded body untouched. Any other status becomes an
    /// error carrying the status code and raw body text. `model` must come
    /// from the provider's own table; anything else fails before any I/O.
    pub(crate) async fn dispatch<P: Serialize + ?Sized>(
        &self,
        provider: &ProviderDescriptor,
        model: &ModelDescriptor,
        payload: &P,
    ) -> Result<Value, LlmError> {
        let model = match provider.model(model.id)? {
            registered if registered == model => registered,
            _ => {
                return Err(LlmError::invalid_request(format!(
                    "Model '{}' is not registered for {} with api-version {}",
                    model.id, provider.name, model.api_version
                )))
            }
        };

        let url = provider.endpoint(self.config.base_url(), model);
        let headers = self.headers(provider)?;

        tracing::debug!(provider = provider.name, model = model.id, url = %url, "Sending gateway request");
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(payload = %serde_json::to_string(payload)?, "Gateway request payload");
        }

        let mut request = self.http_client.post(&url).headers(headers).json(payload);
        if let Some(timeout) = provider.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(provider = provider.name, model = model.id, error = %e, "Gateway request failed");
            LlmError::Network { source: e }
        })?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(|e| LlmError::Network { source: e })?;
            tracing::debug!(provider = provider.name, status = status.as_u16(), "Gateway request succeeded");
            Ok(serde_json::from_str(&body)?)
        } else {
            // Get retry-after header before consuming the response
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::warn!(
                provider = provider.name,
                model = model.id,
                status = status.as_u16(),
                body = %error_text,
                "Gateway returned an error status"
            );

            Err(LlmError::from_status(status.as_u16(), error_text, retry_after))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::claude::HAIKU_3_ID;
    use crate::providers::{CLAUDE, GEMINI, QWEN};
    use crate::qwen::QwenChatCompletionRequest;
    use crate::types::Message;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client(key: &str) -> GatewayClient {
        GatewayClient::new(GatewayConfig::new(key, "http://localhost:9").unwrap()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let config = GatewayConfig::new("test-key", "http://localhost:9").unwrap();
        assert!(GatewayClient::new(config).is_ok());
    }

    #[test]
    fn test_api_key_header() {
        let headers = client("test-key").headers(&CLAUDE).unwrap();
        assert_eq!(headers.get("api-key").unwrap(), "test-key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(ACCEPT).is_none());
    }

    #[test]
    fn test_bearer_header() {
        let headers = client("test-key").headers(&QWEN).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
        assert!(headers.get("api-key").is_none());
    }

    #[test]
    fn test_accept_header_for_gemini() {
        let headers = client("test-key").headers(&GEMINI).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_key_is_authentication_error() {
        let result = client("bad\nkey").headers(&CLAUDE);
        assert!(matches!(result, Err(LlmError::Authentication { status: None, .. })));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GatewayClient>();
    }

    #[tokio::test]
    async fn test_dispatch_rejects_unregistered_descriptors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client =
            GatewayClient::new(GatewayConfig::new("test-key", server.url()).unwrap()).unwrap();

        let unknown = ModelDescriptor::new("not-a-model", "x");
        let err = client.dispatch(&QWEN, &unknown, &json!({})).await.unwrap_err();
        assert!(err.is_validation());

        let foreign = CLAUDE.model(HAIKU_3_ID).unwrap();
        let err = client.dispatch(&QWEN, foreign, &json!({})).await.unwrap_err();
        assert!(err.is_validation());

        let wrong_version = ModelDescriptor::new(HAIKU_3_ID, "1999-01-01");
        let err = client.dispatch(&CLAUDE, &wrong_version, &json!({})).await.unwrap_err();
        assert!(err.is_validation());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_rejects_body_model_that_differs_from_route() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client =
            GatewayClient::new(GatewayConfig::new("test-key", server.url()).unwrap()).unwrap();

        let request = QwenChatCompletionRequest {
            model: "qwen-max".to_string(),
            messages: vec![Message::user("Hi")],
            temperature: None,
            max_tokens: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        };
        let err = client.send("qwen-plus", &request).await.unwrap_err();

        assert!(matches!(err, LlmError::InvalidRequest { status: None, .. }));
        assert!(err.to_string().contains("qwen-max"));
        mock.assert_async().await;
    }
}
