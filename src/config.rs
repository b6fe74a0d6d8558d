//! Adapter configuration.
//!
//! Three settings come from the execution environment: the tenant/project
//! code, the API key and the preset hash. Validation is asymmetric on
//! purpose, matching the service this adapter wraps: the project code and
//! API key are mandatory, while a missing preset hash is only logged (it is
//! still listed in the error message when another setting is missing too).

use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::LaasError;

/// Default LaaS preset API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-laas.wanted.co.kr/api/preset/v2";

/// Whole-request timeout for upstream calls (10 minutes).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

pub const ENV_PROJECT_CODE: &str = "LAAS_PROJECT_CODE";
pub const ENV_API_KEY: &str = "LAAS_API_KEY";
pub const ENV_PRESET_HASH: &str = "LAAS_PRESET_HASH";

/// Immutable configuration for a [`crate::providers::laas::LaasClient`].
#[derive(Debug, Clone)]
pub struct LaasConfig {
    pub base_url: String,
    pub project_code: String,
    pub api_key: String,
    /// Preset identifier selecting a prompt/model profile upstream. Sent as
    /// `"hash": null` when unset.
    pub preset_hash: Option<String>,
}

impl LaasConfig {
    /// Read configuration from `LAAS_PROJECT_CODE`, `LAAS_API_KEY` and
    /// `LAAS_PRESET_HASH`. Empty values count as missing.
    pub fn from_env() -> Result<Self, LaasError> {
        Self::from_parts(
            env_var(ENV_PROJECT_CODE),
            env_var(ENV_API_KEY),
            env_var(ENV_PRESET_HASH),
        )
    }

    /// Build configuration from optional raw values; `None` or empty means
    /// unset. This is where the asymmetric validation lives.
    pub fn from_parts(
        project_code: Option<String>,
        api_key: Option<String>,
        preset_hash: Option<String>,
    ) -> Result<Self, LaasError> {
        let project_code = project_code.filter(|v| !v.is_empty());
        let api_key = api_key.filter(|v| !v.is_empty());
        let preset_hash = preset_hash.filter(|v| !v.is_empty());

        info!(configured = project_code.is_some(), "{ENV_PROJECT_CODE}");
        info!(configured = api_key.is_some(), "{ENV_API_KEY}");
        info!(configured = preset_hash.is_some(), "{ENV_PRESET_HASH}");

        match (project_code, api_key) {
            (Some(project_code), Some(api_key)) => {
                if preset_hash.is_none() {
                    warn!("{ENV_PRESET_HASH} is not set; requests will carry a null preset hash");
                }
                Ok(Self {
                    base_url: DEFAULT_BASE_URL.to_string(),
                    project_code,
                    api_key,
                    preset_hash,
                })
            }
            (project_code, api_key) => {
                let mut missing = Vec::new();
                if project_code.is_none() {
                    missing.push(ENV_PROJECT_CODE);
                }
                if api_key.is_none() {
                    missing.push(ENV_API_KEY);
                }
                if preset_hash.is_none() {
                    missing.push(ENV_PRESET_HASH);
                }
                let message = format!(
                    "Missing Laas credentials in environment variables: {}",
                    missing.join(", ")
                );
                error!("{message}");
                Err(LaasError::Configuration(message))
            }
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
