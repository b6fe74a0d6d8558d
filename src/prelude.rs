//! Convenience re-exports for the common path.

pub use crate::config::LaasConfig;
pub use crate::error::LaasError;
pub use crate::providers::laas::{LaasBuilder, LaasClient};
pub use crate::stream::{ChatStream, StreamChunk};
pub use crate::traits::ChatCapability;
pub use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, FinishReason, MessageContent,
    MessageRole, Usage,
};
