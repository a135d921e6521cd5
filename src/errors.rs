use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Missing url parameter")]
    MissingUrl,

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Upstream page returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("No readable text found in page")]
    EmptyBody,

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SummarizeError {
    /// HTTP status code returned to the browser for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::MissingUrl | SummarizeError::InvalidUrl(_) => 400,
            SummarizeError::UpstreamStatus(_) => 502,
            SummarizeError::UnsupportedContentType(_) => 415,
            SummarizeError::EmptyBody => 422,
            SummarizeError::HttpError(_)
            | SummarizeError::OpenAIError(_)
            | SummarizeError::ConfigError(_) => 500,
        }
    }

    /// Message shown to the user. Internal details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::MissingUrl => "URLを指定してください。".to_string(),
            SummarizeError::InvalidUrl(_) => "正しい形式のURLを入力してください。".to_string(),
            SummarizeError::UpstreamStatus(status) => {
                format!("ページの取得に失敗しました。(HTTP {status})")
            }
            SummarizeError::UnsupportedContentType(_) => {
                "HTMLページ以外は要約できません。".to_string()
            }
            SummarizeError::EmptyBody => "本文が見つかりませんでした。".to_string(),
            SummarizeError::HttpError(_)
            | SummarizeError::OpenAIError(_)
            | SummarizeError::ConfigError(_) => "サマリーの生成に失敗しました。".to_string(),
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<url::ParseError> for SummarizeError {
    fn from(error: url::ParseError) -> Self {
        SummarizeError::InvalidUrl(error.to_string())
    }
}
