/// oneURL summarizer - returns a one-line summary of any web page.
///
/// The crate is split into a pure, offline summarization engine and the thin
/// I/O layer that serves it:
/// 1. `summarizer` picks the most representative sentence of an article and
///    bounds it to a character budget, deterministically and without network
/// 2. `fetch` and `extract` download a page and turn its HTML into plain text
/// 3. `ai` optionally asks an `OpenAI` model first; any failure falls back to
///    the local engine
/// 4. `api` exposes `GET /api/summarize?url=…` as an AWS Lambda handler
///
/// # Example
///
/// ```
/// use oneurl::summarizer::{SummaryConfig, summarize_locally};
///
/// let text = "猫は夜行性の動物です。猫は目が良く、暗闇でも活動できます。";
/// let summary = summarize_locally(text, &SummaryConfig::default());
/// assert!(summary.chars().count() <= 120);
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod extract;
pub mod features;
pub mod fetch;
pub mod summarizer;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup.
///
/// # Example
///
/// ```
/// oneurl::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
