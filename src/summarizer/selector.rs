use super::SummaryConfig;
use super::frequency::FrequencyMap;
use super::scorer::score_sentence;

/// Choose the summary body among `sentences`.
///
/// No sentences yields `None`; a single sentence is returned verbatim;
/// otherwise the top-scoring sentence wins and ties keep document order.
#[must_use]
pub fn select_summary<'a>(
    sentences: &[&'a str],
    frequencies: &FrequencyMap,
    config: &SummaryConfig,
) -> Option<&'a str> {
    match sentences {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut ranked: Vec<(f64, &'a str)> = sentences
                .iter()
                .enumerate()
                .map(|(position, sentence)| {
                    (
                        score_sentence(sentence, position, frequencies, config),
                        *sentence,
                    )
                })
                .collect();
            // `sort_by` is stable, which keeps earlier sentences ahead on ties.
            ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

            ranked
                .first()
                .map(|(_, sentence)| *sentence)
                .or_else(|| sentences.first().copied())
        }
    }
}
