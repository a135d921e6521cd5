//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the Responses API call used for the optional remote
//! summarization stage.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::RemoteSummarizer;
use crate::errors::SummarizeError;

const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_OUTPUT_TOKENS: usize = 400;

/// Article text beyond this many characters is not sent to the model.
pub const MAX_INPUT_CHARS: usize = 12_000;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    max_chars: usize,
    http: Client,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        max_chars: usize,
    ) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                SummarizeError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        Ok(Self {
            api_key,
            org_id,
            model_name,
            max_chars,
            http,
        })
    }

    #[must_use]
    pub fn build_prompt(&self, article_text: &str, source_url: &str) -> Vec<ChatCompletionMessage> {
        let body: String = article_text.chars().take(MAX_INPUT_CHARS).collect();

        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(format!(
                    "You summarise web pages for a one-line preview. \
                    Reply with a single plain-text sentence of at most {} characters, \
                    written in the language of the page. No markdown, no preamble.",
                    self.max_chars
                )),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(format!("URL: {source_url}\n\n{body}")),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request to `OpenAI` fails or the response
    /// cannot be parsed into the expected shape.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Using OpenAI prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();
        info!(
            model = %self.model_name,
            estimated_input_tokens,
            "Requesting remote summary"
        );

        let request_body = json!({
            "model": self.model_name,
            "input": build_responses_input_from_prompt(&prompt),
            "max_output_tokens": MAX_OUTPUT_TOKENS
        });

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = self
            .http
            .post(RESPONSES_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_output_text(&response_json)
            .ok_or_else(|| SummarizeError::OpenAIError("No text in response".to_string()))
    }
}

#[async_trait]
impl RemoteSummarizer for LlmClient {
    async fn summarize(&self, text: &str, source_url: &str) -> Result<String, SummarizeError> {
        let prompt = self.build_prompt(text, source_url);
        self.generate_summary(prompt).await
    }
}

/// Build Responses API input payload from a chat-style prompt.
/// - Filters out assistant messages (Responses treats assistant content as output)
/// - Emits typed parts: { type: "`input_text`", text }
pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                _ => "user",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": [{ "type": "input_text", "text": t }]
                })),
                _ => None,
            }
        })
        .collect()
}

/// Pull the generated text out of a Responses API payload.
///
/// Prefers the `output_text` convenience field, then joins every
/// `output_text` part found under `output[].content[]`.
pub(crate) fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    let collected: Vec<String> = response_json
        .get("output")
        .and_then(|o| o.as_array())
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(|c| c.as_array()))
        .flatten()
        .filter(|p| p.get("type").and_then(|t| t.as_str()) == Some("output_text"))
        .filter_map(|p| {
            p.get("text")
                .and_then(|t| t.as_str().or_else(|| t.get("value").and_then(|v| v.as_str())))
                .map(str::to_string)
        })
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}
