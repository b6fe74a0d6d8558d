//! LaaS client: validation, upstream invocation and the capability impl.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::{DEFAULT_TIMEOUT, LaasConfig};
use crate::error::LaasError;
use crate::stream::ChatStream;
use crate::traits::ChatCapability;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

use super::builder::LaasBuilder;
use super::streaming::{DEFAULT_CHUNK_PACE, synthesize_stream};
use super::transformers;
use super::utils::build_headers;

/// Client for the LaaS preset chat-completion API.
///
/// Holds only immutable configuration and a pooled HTTP client; concurrent
/// requests are fully independent. One upstream attempt per request, no
/// retries.
#[derive(Debug, Clone)]
pub struct LaasClient {
    config: LaasConfig,
    http_client: reqwest::Client,
    timeout: Duration,
    chunk_pace: Duration,
}

impl LaasClient {
    /// Create a client from an already-validated configuration.
    pub fn new(config: LaasConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
            chunk_pace: DEFAULT_CHUNK_PACE,
        }
    }

    /// Create a client from `LAAS_*` environment variables.
    pub fn from_env() -> Result<Self, LaasError> {
        Ok(Self::new(LaasConfig::from_env()?))
    }

    pub fn builder() -> LaasBuilder {
        LaasBuilder::new()
    }

    pub fn config(&self) -> &LaasConfig {
        &self.config
    }

    pub(crate) fn from_parts(
        config: LaasConfig,
        http_client: reqwest::Client,
        timeout: Duration,
        chunk_pace: Duration,
    ) -> Self {
        Self {
            config,
            http_client,
            timeout,
            chunk_pace,
        }
    }

    /// One POST to `{base_url}/chat/completions`. Fail fast on any error.
    async fn call_api(&self, request: &ChatRequest) -> Result<serde_json::Value, LaasError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let headers = build_headers(&self.config.project_code, &self.config.api_key)?;
        let body = transformers::build_request_body(self.config.preset_hash.as_deref(), request);

        debug!(url = %url, "calling LaaS API");
        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let err = LaasError::from(e);
                error!("LaaS API request failed: {err}");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let err = LaasError::Api {
                code: status.as_u16(),
                message: body_text,
            };
            error!("LaaS API returned an error: {err}");
            return Err(err);
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            let err = LaasError::Internal(e.to_string());
            error!("failed to read LaaS API response: {err}");
            err
        })
    }
}

/// Run both pre-flight checks in order. Role errors surface first when a
/// request trips both.
pub(crate) fn validate_request_messages(messages: &[ChatMessage]) -> Result<(), LaasError> {
    validate_roles(messages)?;
    validate_tool_calls(messages)
}

fn validate_roles(messages: &[ChatMessage]) -> Result<(), LaasError> {
    debug!("validating message roles");
    for (index, message) in messages.iter().enumerate() {
        if !message.role.is_supported() {
            let role = message.role.as_str().to_string();
            error!(index, role = %role, "invalid message role");
            return Err(LaasError::InvalidRole { role, index });
        }
    }
    Ok(())
}

fn validate_tool_calls(messages: &[ChatMessage]) -> Result<(), LaasError> {
    if messages.iter().any(ChatMessage::has_tool_calls) {
        warn!("rejecting request with tool calls; the LaaS API does not support them");
        return Err(LaasError::ToolCallsUnsupported);
    }
    Ok(())
}

#[async_trait]
impl ChatCapability for LaasClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LaasError> {
        info!(
            model = %request.model,
            messages = request.messages.len(),
            "chat completion request"
        );

        if request.stream {
            let err = LaasError::InvalidRequest(
                "Streaming requests should use the chat_stream method".to_string(),
            );
            error!("{err}");
            return Err(err);
        }

        validate_request_messages(&request.messages)?;

        let raw = self.call_api(&request).await?;
        transformers::transform_response(raw, &request.model)
    }

    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, LaasError> {
        info!(
            model = %request.model,
            messages = request.messages.len(),
            "chat stream request"
        );

        validate_request_messages(&request.messages)?;

        let raw = self.call_api(&request).await?;
        let response = transformers::transform_response(raw, &request.model)?;
        let usage = response.usage.unwrap_or_default();
        Ok(synthesize_stream(response.text(), usage, self.chunk_pace))
    }
}
