//! Capability trait implemented by the adapter.

use async_trait::async_trait;

use crate::error::LaasError;
use crate::stream::ChatStream;
use crate::types::{ChatRequest, ChatResponse};

/// Chat capability exposed to the hosting routing layer.
///
/// Deliberately narrow: one unary completion operation and one streaming
/// operation. The host constructs an implementation explicitly at startup;
/// no lifecycle hooks or base-class machinery are involved.
#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Execute a chat completion request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LaasError>;

    /// Execute a chat completion request, producing a fragment stream.
    async fn chat_stream(&self, request: ChatRequest) -> Result<ChatStream, LaasError>;
}
