//! LaaS provider implementation.
//!
//! Wraps the LaaS preset chat-completion endpoint behind
//! [`crate::traits::ChatCapability`]: validate, transform, one HTTP POST,
//! transform back, and (for streaming callers) synthesize fragments.

mod builder;
mod client;
mod streaming;
mod transformers;
mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use builder::LaasBuilder;
pub use client::LaasClient;
