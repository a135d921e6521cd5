use tracing::{info, warn};

use crate::SummarizeError;
use crate::ai::{LlmClient, RemoteSummarizer};
use crate::core::{config::AppConfig, models::SummaryResponse};
use crate::extract::extract_article;
use crate::fetch::{PageFetcher, parse_target_url};
use crate::summarizer::{SummaryConfig, format_summary, summarize_locally};

/// Fetch → extract → summarize, with the remote model as an optional first stage.
pub struct SummaryService {
    fetcher: PageFetcher,
    remote: Option<Box<dyn RemoteSummarizer>>,
    summary: SummaryConfig,
}

impl SummaryService {
    /// Build the service from configuration. The remote stage is enabled
    /// only when an `OpenAI` key is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, SummarizeError> {
        let remote = match &config.openai_api_key {
            Some(key) => Some(Box::new(LlmClient::new(
                key.clone(),
                config.openai_org_id.clone(),
                config.openai_model.clone(),
                config.summary.effective_max_chars(),
            )?) as Box<dyn RemoteSummarizer>),
            None => None,
        };

        Ok(Self {
            fetcher: PageFetcher::new(config)?,
            remote,
            summary: config.summary.clone(),
        })
    }

    #[must_use]
    pub fn with_remote(mut self, remote: Option<Box<dyn RemoteSummarizer>>) -> Self {
        self.remote = remote;
        self
    }

    /// Summarize already-extracted text. Never fails: any remote failure or
    /// blank remote output falls through to the local engine.
    pub async fn summarize_text(&self, text: &str, source_url: &str) -> String {
        if let Some(remote) = &self.remote {
            match remote.summarize(text, source_url).await {
                Ok(summary) if !summary.trim().is_empty() => {
                    info!("Using remote summary");
                    return format_summary(&summary, self.summary.effective_max_chars());
                }
                Ok(_) => warn!("Remote summarizer returned empty output, using local summary"),
                Err(e) => warn!(error = %e, "Remote summarizer failed, using local summary"),
            }
        }

        summarize_locally(text, &self.summary)
    }

    /// Full pipeline for a user-supplied URL.
    ///
    /// # Errors
    ///
    /// Returns URL validation, fetch, content-type and empty-body errors;
    /// summarization itself cannot fail.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn summarize_url(&self, raw_url: &str) -> Result<SummaryResponse, SummarizeError> {
        let url = parse_target_url(raw_url)?;
        let page = self.fetcher.fetch(&url).await?;
        info!(content_type = %page.content_type, final_url = %page.final_url, "Page accepted");

        let article = extract_article(&page.html, &page.final_url);
        if article.text.trim().is_empty() {
            warn!("Extracted article body is empty");
            return Err(SummarizeError::EmptyBody);
        }
        info!(
            title = %article.title,
            chars = article.text.chars().count(),
            "Extracted article"
        );

        let text = self.summarize_text(&article.text, url.as_str()).await;

        Ok(SummaryResponse {
            title: article.title,
            text,
            source_url: url.to_string(),
        })
    }
}
