//! laas-adapter
//!
//! Adapts the LaaS preset chat-completion HTTP API to a narrow async chat
//! provider contract: one unary completion operation and one streaming
//! operation, suitable for registration with an LLM routing layer.
//!
//! The upstream API is a single synchronous round trip; the streaming
//! operation re-emits the complete reply as paced text fragments.
//!
//! # Example
//!
//! ```rust,no_run
//! use laas_adapter::prelude::*;
//!
//! # async fn example() -> Result<(), LaasError> {
//! let client = LaasClient::builder()
//!     .project_code("my-project")
//!     .api_key("my-key")
//!     .preset_hash("abc123")
//!     .build()?;
//!
//! let request = ChatRequest::new(vec![ChatMessage::user("Hello")]);
//! let response = client.chat(request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod prelude;
pub mod providers;
pub mod stream;
pub mod traits;
pub mod types;

pub use error::LaasError;
