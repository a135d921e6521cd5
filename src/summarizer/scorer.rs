use super::SummaryConfig;
use super::frequency::FrequencyMap;
use super::text::tokenize;

/// Score a sentence for extractive selection.
///
/// `keyword × position_boost − |chars − ideal_length| × length_penalty`,
/// where `keyword` sums the document frequency of every token occurrence.
/// A sentence without tokens scores 0.
#[must_use]
pub fn score_sentence(
    sentence: &str,
    position: usize,
    frequencies: &FrequencyMap,
    config: &SummaryConfig,
) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let keyword: f64 = tokens
        .iter()
        .map(|token| frequencies.get(token).copied().unwrap_or(0) as f64)
        .sum();

    let boost = match position {
        0 => config.lead_boost,
        1 => config.second_boost,
        _ => 1.0,
    };

    #[allow(clippy::cast_precision_loss)]
    let deviation = sentence
        .chars()
        .count()
        .abs_diff(config.effective_ideal_length()) as f64;

    keyword * boost - deviation * config.length_penalty
}
