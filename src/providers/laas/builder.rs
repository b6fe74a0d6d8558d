//! Builder for [`LaasClient`].

use std::time::Duration;

use crate::config::{
    DEFAULT_TIMEOUT, ENV_API_KEY, ENV_PRESET_HASH, ENV_PROJECT_CODE, LaasConfig, env_var,
};
use crate::error::LaasError;

use super::client::LaasClient;
use super::streaming::DEFAULT_CHUNK_PACE;

/// Fluent construction of a [`LaasClient`].
///
/// Unset credentials fall back to the `LAAS_*` environment variables;
/// validation (including the non-fatal preset hash) happens in `build`.
#[derive(Debug, Clone, Default)]
pub struct LaasBuilder {
    base_url: Option<String>,
    project_code: Option<String>,
    api_key: Option<String>,
    preset_hash: Option<String>,
    timeout: Option<Duration>,
    chunk_pace: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl LaasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn project_code(mut self, project_code: impl Into<String>) -> Self {
        self.project_code = Some(project_code.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn preset_hash(mut self, preset_hash: impl Into<String>) -> Self {
        self.preset_hash = Some(preset_hash.into());
        self
    }

    /// Whole-request timeout for upstream calls. Defaults to 600 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pause between synthetic stream fragments. Pacing only; zero is valid.
    pub fn chunk_pace(mut self, pace: Duration) -> Self {
        self.chunk_pace = Some(pace);
        self
    }

    /// Use a pre-configured HTTP client instead of a default one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<LaasClient, LaasError> {
        let project_code = self.project_code.or_else(|| env_var(ENV_PROJECT_CODE));
        let api_key = self.api_key.or_else(|| env_var(ENV_API_KEY));
        let preset_hash = self.preset_hash.or_else(|| env_var(ENV_PRESET_HASH));

        let mut config = LaasConfig::from_parts(project_code, api_key, preset_hash)?;
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        Ok(LaasClient::from_parts(
            config,
            self.http_client.unwrap_or_default(),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            self.chunk_pace.unwrap_or(DEFAULT_CHUNK_PACE),
        ))
    }
}
