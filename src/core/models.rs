use serde::{Deserialize, Serialize};

/// JSON body of a successful `/api/summarize` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub title: String,
    pub text: String,
    pub source_url: String,
}

/// Readable content pulled out of an HTML page.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

/// A fetched HTML document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    pub content_type: String,
    pub html: String,
}
