//! Outbound dispatch to the proxied chat-completions endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use super::error::RelayError;
use super::provider::Provider;
use super::types::{ChatRequest, CompletionRequest};

const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

/// Header carrying the memory-service credential.
const MEMORY_KEY_HEADER: &str = "x-supermemory-api-key";
/// Header scoping memory lookups to a single user.
const USER_ID_HEADER: &str = "x-sm-user-id";

/// Stateless forwarding client for the relay endpoint.
///
/// Holds only the proxy base and a shared HTTP client; credentials arrive
/// with each request and are never retained.
pub struct RelayClient {
    client: Client,
    proxy_base: String,
}

impl RelayClient {
    pub fn new(proxy_base: String) -> Self {
        Self {
            client: Client::new(),
            proxy_base,
        }
    }

    /// Forward a chat request through the memory proxy.
    ///
    /// Validates, resolves the provider, dispatches exactly once, and relays
    /// the upstream JSON verbatim. Both validation checks run before any
    /// network activity; there is no retry on any failure.
    pub async fn forward(&self, request: ChatRequest) -> Result<Value, RelayError> {
        if request.api_key.is_empty() || request.supermemory_key.is_empty() {
            return Err(RelayError::MissingCredentials);
        }

        let provider: Provider = request.provider.parse()?;
        let endpoint = provider.endpoint();
        let url = endpoint.chat_completions_url(&self.proxy_base);

        info!(%provider, user_id = %request.user_id, "forwarding chat completion");

        let body = CompletionRequest {
            model: endpoint.default_model.to_string(),
            messages: request.messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", request.api_key))
            .header("Content-Type", "application/json")
            .header(MEMORY_KEY_HEADER, &request.supermemory_key)
            .header(USER_ID_HEADER, &request.user_id)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(%provider, status, "upstream returned an error");
            return Err(RelayError::Upstream {
                provider,
                status,
                body,
            });
        }

        let payload = response.json().await?;
        info!(%provider, "chat completion relayed");
        Ok(payload)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::types::{Message, Role};

    fn request(provider: &str, api_key: &str, supermemory_key: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![Message {
                role: Role::User,
                content: "hello".to_string(),
            }],
            user_id: "user-1".to_string(),
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            supermemory_key: supermemory_key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_forward_injects_credential_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/https://api.openai.com/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_header("content-type", "application/json")
            .match_header("x-supermemory-api-key", "sm-test")
            .match_header("x-sm-user-id", "user-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
            .create_async()
            .await;

        let client = RelayClient::new(server.url());
        let payload = client
            .forward(request("openai", "sk-test", "sm-test"))
            .await
            .unwrap();

        assert_eq!(payload["choices"][0]["message"]["content"], "hi");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forward_uses_default_model_and_fixed_sampling() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/https://api.groq.com/openai/v1/chat/completions")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "mixtral-8x7b-32768",
                "max_tokens": 1000,
                "temperature": 0.7,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = RelayClient::new(server.url());
        client
            .forward(request("groq", "sk-test", "sm-test"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_dispatch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = RelayClient::new(server.url());

        let err = client
            .forward(request("openai", "", "sm-test"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MissingCredentials));

        let err = client
            .forward(request("openai", "sk-test", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MissingCredentials));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_provider_skips_dispatch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = RelayClient::new(server.url());
        let err = client
            .forward(request("mistral", "sk-test", "sm-test"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::InvalidProvider(ref s) if s == "mistral"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/https://api.anthropic.com/v1/chat/completions")
            .with_status(401)
            .with_body("invalid x-api-key")
            .create_async()
            .await;

        let client = RelayClient::new(server.url());
        let err = client
            .forward(request("anthropic", "sk-bad", "sm-test"))
            .await
            .unwrap_err();

        match err {
            RelayError::Upstream {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, Provider::Anthropic);
                assert_eq!(status, 401);
                assert_eq!(body, "invalid x-api-key");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/https://api.openai.com/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = RelayClient::new(server.url());
        let err = client
            .forward(request("openai", "sk-test", "sm-test"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }
}
