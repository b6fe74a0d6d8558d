//! LaaS wire types.
//!
//! Private deserialize targets for the upstream reply. Fields the adapter
//! receives but discards (`role`, `finish_reason`) are kept so the schema
//! stays documented in one place.

use serde::Deserialize;

/// Raw upstream chat-completion response.
#[derive(Debug, Deserialize)]
pub(crate) struct LaasChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub choices: Vec<LaasChoice>,
    #[serde(default)]
    pub usage: Option<LaasUsage>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub(crate) struct LaasChoice {
    pub message: LaasAssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub(crate) struct LaasAssistantMessage {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LaasUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}
