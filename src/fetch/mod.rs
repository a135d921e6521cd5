//! HTML page fetching.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::FetchedPage;
use crate::errors::SummarizeError;

/// Parse a user-supplied URL, accepting only `http` and `https`.
///
/// # Errors
///
/// Returns `MissingUrl` for blank input and `InvalidUrl` for anything that
/// does not parse or uses another scheme.
pub fn parse_target_url(raw: &str) -> Result<Url, SummarizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SummarizeError::MissingUrl);
    }

    let url = Url::parse(trimmed)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SummarizeError::InvalidUrl(format!(
            "unsupported scheme: {other}"
        ))),
    }
}

#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

/// Downloads pages with a shared client, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SummarizeError::HttpError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `url`, following redirects, and return its HTML body.
    ///
    /// # Errors
    ///
    /// - `UpstreamStatus` when the final response is not a 2xx
    /// - `UnsupportedContentType` when the body is not `text/html`
    /// - `HttpError` on transport failures or timeouts
    #[tracing::instrument(level = "info", skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, SummarizeError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("Page request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Upstream returned error status");
            return Err(SummarizeError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !is_html_content_type(&content_type) {
            warn!(content_type = %content_type, "Refusing non-HTML content");
            return Err(SummarizeError::UnsupportedContentType(content_type));
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("Failed to read page body: {e}")))?;

        info!(bytes = html.len(), "Fetched page");

        Ok(FetchedPage {
            final_url,
            content_type,
            html,
        })
    }
}
