//! Optional remote (LLM) summarization

pub mod client;

use async_trait::async_trait;

use crate::errors::SummarizeError;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens};

/// A summarizer that may fail; callers fall back to the local engine.
#[async_trait]
pub trait RemoteSummarizer: Send + Sync {
    /// # Errors
    ///
    /// Any failure (transport, API, empty output) is reported as an error.
    async fn summarize(&self, text: &str, source_url: &str) -> Result<String, SummarizeError>;
}
