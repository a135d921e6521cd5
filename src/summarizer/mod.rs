//! Local extractive summarization.
//!
//! Picks the single most representative sentence of an article body and
//! bounds it to a display budget. Everything here is pure and offline; the
//! remote model stage lives in [`crate::ai`] and falls back to this module.

pub mod format;
pub mod frequency;
pub mod scorer;
pub mod selector;
pub mod text;

pub use format::{ELLIPSIS, FALLBACK_PLACEHOLDER, format_summary};
pub use frequency::{FrequencyMap, build_frequency_map};
pub use scorer::score_sentence;
pub use selector::select_summary;
pub use text::{normalize, split_sentences, tokenize};

pub const DEFAULT_IDEAL_LENGTH: usize = 80;
pub const DEFAULT_MAX_CHARS: usize = 120;
pub const DEFAULT_LENGTH_PENALTY: f64 = 0.05;
pub const DEFAULT_LEAD_BOOST: f64 = 1.10;
pub const DEFAULT_SECOND_BOOST: f64 = 1.05;

/// Tunables for scoring and formatting.
///
/// The weights are empirical and have not been calibrated against a corpus;
/// they are exposed so callers can experiment without patching the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Sentence length (in characters) the length penalty is centred on.
    pub ideal_length: usize,
    /// Maximum characters in the formatted summary, ellipsis included.
    pub max_chars: usize,
    /// Penalty per character of deviation from `ideal_length`.
    pub length_penalty: f64,
    /// Multiplier for the first sentence.
    pub lead_boost: f64,
    /// Multiplier for the second sentence.
    pub second_boost: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ideal_length: DEFAULT_IDEAL_LENGTH,
            max_chars: DEFAULT_MAX_CHARS,
            length_penalty: DEFAULT_LENGTH_PENALTY,
            lead_boost: DEFAULT_LEAD_BOOST,
            second_boost: DEFAULT_SECOND_BOOST,
        }
    }
}

impl SummaryConfig {
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn with_ideal_length(mut self, ideal_length: usize) -> Self {
        self.ideal_length = ideal_length;
        self
    }

    /// Budget actually applied; a zero budget would leave no room for the ellipsis.
    #[must_use]
    pub fn effective_max_chars(&self) -> usize {
        self.max_chars.max(1)
    }

    #[must_use]
    pub fn effective_ideal_length(&self) -> usize {
        self.ideal_length.max(1)
    }
}

/// Summarize `text` without any network or model access.
///
/// Always returns a display-safe single line of at most
/// `config.max_chars` characters (minimum 1). Input with no usable content
/// yields [`FALLBACK_PLACEHOLDER`], cut to the same budget.
///
/// # Example
///
/// ```
/// use oneurl::summarizer::{SummaryConfig, summarize_locally};
///
/// let summary = summarize_locally("Rust is fast. Rust is safe!", &SummaryConfig::default());
/// assert!(summary.starts_with("Rust"));
/// ```
#[must_use]
pub fn summarize_locally(text: &str, config: &SummaryConfig) -> String {
    let normalized = normalize(text);
    let sentences = split_sentences(&normalized);
    let frequencies = build_frequency_map(&sentences);

    let body = select_summary(&sentences, &frequencies, config).unwrap_or_default();
    format_summary(body, config.effective_max_chars())
}
