use std::collections::{HashMap, HashSet};

use super::text::tokenize;

/// Token to the number of distinct sentences containing it.
pub type FrequencyMap = HashMap<String, usize>;

/// Build sentence-level document frequencies.
///
/// Each sentence contributes a token at most once, so a word repeated five
/// times inside one sentence and nowhere else counts as 1.
#[must_use]
pub fn build_frequency_map(sentences: &[&str]) -> FrequencyMap {
    let mut frequencies = FrequencyMap::new();
    for sentence in sentences {
        let distinct: HashSet<String> = tokenize(sentence).into_iter().collect();
        for token in distinct {
            *frequencies.entry(token).or_insert(0) += 1;
        }
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::text::{normalize, split_sentences};

    #[test]
    fn test_repetition_within_a_sentence_counts_once() {
        let map = build_frequency_map(&["rust rust rust rust rust!", "go is fine."]);
        assert_eq!(map.get("rust"), Some(&1));
        assert_eq!(map.get("go"), Some(&1));
        assert_eq!(map.get("is"), Some(&1));
    }

    #[test]
    fn test_counts_across_sentences() {
        let map = build_frequency_map(&["Rust is fast!", "rust is safe?", "Cargo ships."]);
        assert_eq!(map.get("rust"), Some(&2));
        assert_eq!(map.get("is"), Some(&2));
        assert_eq!(map.get("cargo"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_no_count_exceeds_sentence_count() {
        let texts = [
            "猫は夜行性の動物です。猫は目が良く、暗闇でも活動できます。猫はペットとして人気です。",
            "News today! News tomorrow? News news news! Weather is fine.",
            "a a a a",
            "",
        ];
        for text in texts {
            let normalized = normalize(text);
            let sentences = split_sentences(&normalized);
            let map = build_frequency_map(&sentences);
            assert!(
                map.values().all(|&count| count <= sentences.len()),
                "frequency bound violated for {text:?}"
            );
        }
    }
}
