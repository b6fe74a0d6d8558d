//! Request/response types for the adapter.

mod chat;
mod common;
mod response;

pub use chat::{ChatMessage, ChatRequest, ContentPart, MessageContent, MessageRole};
pub use common::{FinishReason, Usage};
pub use response::ChatResponse;
