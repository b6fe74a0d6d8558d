//! Chat message types and the inbound request shape.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Message role.
///
/// The LaaS API only accepts `user`, `assistant` and `system`; anything else
/// deserializes into `Other` so that validation can reject it by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    #[serde(untagged)]
    Other(String),
}

impl MessageRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Other(role) => role,
        }
    }

    /// Whether the upstream API accepts this role.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::System | Self::User | Self::Assistant)
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message content - plain text or an ordered list of content parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// First text content found, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(parts) => parts.iter().find_map(|part| {
                if let ContentPart::Text { text } = part {
                    Some(text.as_str())
                } else {
                    None
                }
            }),
        }
    }

    /// All text content, concatenated.
    pub fn all_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => {
                let mut result = String::new();
                for part in parts {
                    if let ContentPart::Text { text } = part {
                        if !result.is_empty() {
                            result.push(' ');
                        }
                        result.push_str(text);
                    }
                }
                result
            }
        }
    }
}

/// One item of multimodal content.
///
/// Closed over the shapes the LaaS API understands; unrecognized dict-shaped
/// items are kept verbatim in `Unknown` and pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { url: String },
    DocumentUrl { url: String },
    Unknown(Value),
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl { url: url.into() }
    }

    pub fn document_url(url: impl Into<String>) -> Self {
        Self::DocumentUrl { url: url.into() }
    }

    /// Normalize a loosely-shaped content item.
    ///
    /// Bare strings become text parts; recognized tagged dicts map to their
    /// typed variants; everything else is captured as `Unknown`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text { text },
            Value::Object(map) => Self::from_object(map),
            other => Self::Unknown(other),
        }
    }

    fn from_object(map: Map<String, Value>) -> Self {
        match map.get("type").and_then(Value::as_str) {
            Some("text") => {
                if let Some(text) = map.get("text").and_then(Value::as_str) {
                    return Self::Text {
                        text: text.to_string(),
                    };
                }
            }
            Some("image_url") => {
                if let Some(url) = map
                    .get("image_url")
                    .and_then(|source| source.get("url"))
                    .and_then(Value::as_str)
                {
                    return Self::ImageUrl {
                        url: url.to_string(),
                    };
                }
            }
            Some("document") => {
                if let Some(url) = map
                    .get("document_url")
                    .and_then(|source| source.get("url"))
                    .and_then(Value::as_str)
                {
                    return Self::DocumentUrl {
                        url: url.to_string(),
                    };
                }
            }
            _ => {}
        }
        Self::Unknown(Value::Object(map))
    }

    /// LaaS wire shape for this part. `Unknown` is identity passthrough.
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Text { text } => json!({ "type": "text", "text": text }),
            Self::ImageUrl { url } => json!({
                "type": "image_url",
                "image_url": { "url": url },
            }),
            Self::DocumentUrl { url } => json!({
                "type": "document",
                "document_url": { "url": url },
            }),
            Self::Unknown(value) => value.clone(),
        }
    }
}

impl Serialize for ContentPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

/// A message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: MessageContent,
    /// Opaque tool-invocation payload. Only inspected for presence: the
    /// upstream API has no tool-call support, so any message carrying this
    /// field is rejected during validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Value>,
}

impl ChatMessage {
    /// Creates a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
            tool_calls: None,
        }
    }

    /// Creates an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(content.into()),
            tool_calls: None,
        }
    }

    /// Creates a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(content.into()),
            tool_calls: None,
        }
    }

    /// Creates a message with multimodal content parts
    pub fn with_parts(role: MessageRole, parts: Vec<ContentPart>) -> Self {
        Self {
            role,
            content: MessageContent::Parts(parts),
            tool_calls: None,
        }
    }

    /// Gets the text content of the message
    pub fn content_text(&self) -> Option<&str> {
        self.content.text()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.is_some()
    }
}

/// A chat completion request as received from the hosting layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name the caller asked for. Never forwarded upstream (the preset
    /// hash selects the model); echoed into the normalized response.
    #[serde(default)]
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Passthrough optional parameters, flattened into the upstream body.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}
