//! Error handling for the LaaS adapter.
//!
//! Every failure surfaces as a [`LaasError`] with an HTTP status code the
//! hosting layer can forward verbatim. The adapter performs exactly one
//! upstream attempt per request; there is no local recovery or retry.

use thiserror::Error;

/// Errors produced by the LaaS adapter.
#[derive(Debug, Error)]
pub enum LaasError {
    /// Required configuration is missing or unusable.
    #[error("{0}")]
    Configuration(String),

    /// The request is malformed for the entry point it was sent to.
    #[error("{0}")]
    InvalidRequest(String),

    /// A message carries a role outside {user, assistant, system}.
    #[error("Invalid role '{role}' at message {index}. Only 'user', 'assistant', 'system' allowed")]
    InvalidRole { role: String, index: usize },

    /// The request contains tool calls, which the upstream API cannot serve.
    #[error("LaaS API does not support tool calls")]
    ToolCallsUnsupported,

    /// The upstream call exceeded the request timeout.
    #[error("LaaS API timeout: {0}")]
    Timeout(String),

    /// The upstream endpoint could not be reached.
    #[error("LaaS API connection error: {0}")]
    Connection(String),

    /// The upstream returned a non-2xx status; `message` embeds its body text.
    #[error("LaaS API HTTP error {code}: {message}")]
    Api { code: u16, message: String },

    /// The upstream reply is missing expected structure.
    #[error("Invalid response structure: {0}")]
    MalformedResponse(String),

    /// Catch-all for unexpected failures.
    #[error("LaaS API error: {0}")]
    Internal(String),
}

impl LaasError {
    /// HTTP status code to surface for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration(_) => 500,
            Self::InvalidRequest(_) => 400,
            Self::InvalidRole { .. } => 400,
            Self::ToolCallsUnsupported => 400,
            Self::Timeout(_) => 504,
            Self::Connection(_) => 503,
            Self::Api { code, .. } => *code,
            Self::MalformedResponse(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Whether the caller, not the upstream, is at fault.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<reqwest::Error> for LaasError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::Connection(error.to_string())
        } else {
            Self::Internal(error.to_string())
        }
    }
}
