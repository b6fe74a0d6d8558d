//! Normalized chat response returned to the hosting layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chat::MessageContent;
use super::common::{FinishReason, Usage};

/// Chat response in the shape the hosting layer expects.
///
/// Always carries a single assistant choice; the adapter fixes
/// `finish_reason` to `stop` regardless of what the upstream reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Response ID, copied from the upstream reply.
    pub id: Option<String>,
    /// Response object kind, fixed to [`ChatResponse::OBJECT`].
    pub object: String,
    /// Creation time, converted from the upstream unix timestamp.
    pub created: Option<DateTime<Utc>>,
    /// Model name the caller asked for, echoed back.
    pub model: Option<String>,
    /// The assistant message content.
    pub content: MessageContent,
    pub finish_reason: Option<FinishReason>,
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Object kind of every response this adapter produces.
    pub const OBJECT: &'static str = "chat.completion";

    /// Create a response with the given content and all metadata unset.
    pub fn new(content: MessageContent) -> Self {
        Self {
            id: None,
            object: Self::OBJECT.to_string(),
            created: None,
            model: None,
            content,
            finish_reason: None,
            usage: None,
        }
    }

    /// First text content of the response, if any.
    pub fn content_text(&self) -> Option<&str> {
        self.content.text()
    }

    /// All text content of the response.
    pub fn text(&self) -> String {
        self.content.all_text()
    }
}
