//! Streaming types.
//!
//! The upstream API has no incremental mode; streams produced by this crate
//! are synthetic, re-emitting an already-complete reply as paced fragments.

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::LaasError;
use crate::types::{FinishReason, Usage};

/// One fragment of a streamed response.
///
/// Content fragments carry a non-empty substring of the final text and no
/// usage. Exactly one terminal fragment follows them: empty text,
/// `is_finished`, `finish_reason = stop` and the usage counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Choice index, always 0.
    pub index: usize,
    pub text: String,
    pub is_finished: bool,
    pub finish_reason: Option<FinishReason>,
    pub usage: Option<Usage>,
}

impl StreamChunk {
    /// A non-terminal content fragment.
    pub fn content(text: String) -> Self {
        Self {
            index: 0,
            text,
            is_finished: false,
            finish_reason: None,
            usage: None,
        }
    }

    /// The terminal fragment closing a stream.
    pub fn terminal(usage: Usage) -> Self {
        Self {
            index: 0,
            text: String::new(),
            is_finished: true,
            finish_reason: Some(FinishReason::Stop),
            usage: Some(usage),
        }
    }
}

/// Chat stream - a pinned, boxed stream of fragments.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, LaasError>> + Send>>;
