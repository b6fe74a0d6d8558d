//! Synthetic streaming: re-emits a complete response as paced fragments.
//!
//! The upstream call is a single blocking round trip; this module only
//! mimics an incrementally-generated response.

use std::time::Duration;

use crate::error::LaasError;
use crate::stream::{ChatStream, StreamChunk};
use crate::types::Usage;

/// Number of content fragments a response is targeted to split into.
const TARGET_CHUNKS: usize = 30;

/// Default pause between fragment emissions. Pacing only; zero is valid.
pub(crate) const DEFAULT_CHUNK_PACE: Duration = Duration::from_millis(10);

/// Partition `content` into fragments of `max(1, chars/30)` characters and
/// emit them in order, closing with exactly one terminal fragment carrying
/// the usage counters. Splitting is by character, so multi-byte text never
/// tears across a fragment boundary.
pub(crate) fn synthesize_stream(content: String, usage: Usage, pace: Duration) -> ChatStream {
    Box::pin(async_stream::stream! {
        let chars: Vec<char> = content.chars().collect();
        let chunk_size = (chars.len() / TARGET_CHUNKS).max(1);

        for piece in chars.chunks(chunk_size) {
            yield Ok::<_, LaasError>(StreamChunk::content(piece.iter().collect()));
            if !pace.is_zero() {
                tokio::time::sleep(pace).await;
            }
        }

        yield Ok(StreamChunk::terminal(usage));
    })
}
