use std::env;
use std::time::Duration;

use crate::summarizer::{DEFAULT_IDEAL_LENGTH, DEFAULT_MAX_CHARS, SummaryConfig};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "oneURL-summarizer/0.1 (+https://example.com)";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enables the remote summarization stage when set.
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub summary: SummaryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_org_id: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            summary: SummaryConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Blank values count as unset. Numeric values must be positive integers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = parse_positive(&get, "FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;
        let max_chars = parse_positive(&get, "SUMMARY_MAX_CHARS", DEFAULT_MAX_CHARS as u64)?;
        let ideal_length =
            parse_positive(&get, "SUMMARY_IDEAL_LENGTH", DEFAULT_IDEAL_LENGTH as u64)?;

        let summary = SummaryConfig::default()
            .with_max_chars(to_usize("SUMMARY_MAX_CHARS", max_chars)?)
            .with_ideal_length(to_usize("SUMMARY_IDEAL_LENGTH", ideal_length)?);

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            fetch_timeout: Duration::from_secs(timeout_secs),
            user_agent: get("FETCH_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            summary,
        })
    }
}

fn parse_positive<G>(get: &G, key: &str, default: u64) -> Result<u64, String>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(0) => Err(format!("{key}: must be greater than zero")),
            Ok(value) => Ok(value),
            Err(e) => Err(format!("{key}: {e}")),
        },
    }
}

fn to_usize(key: &str, value: u64) -> Result<usize, String> {
    usize::try_from(value).map_err(|e| format!("{key}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.summary, SummaryConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-5"),
            ("FETCH_TIMEOUT_SECS", "3"),
            ("SUMMARY_MAX_CHARS", "60"),
            ("SUMMARY_IDEAL_LENGTH", " 40 "),
        ]))
        .unwrap();
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_model, "gpt-5");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert_eq!(config.summary.max_chars, 60);
        assert_eq!(config.summary.ideal_length, 40);
    }

    #[test]
    fn test_blank_api_key_disables_remote() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        let err = AppConfig::from_lookup(lookup_from(&[("SUMMARY_MAX_CHARS", "0")])).unwrap_err();
        assert!(err.starts_with("SUMMARY_MAX_CHARS"));

        let err =
            AppConfig::from_lookup(lookup_from(&[("SUMMARY_IDEAL_LENGTH", "-5")])).unwrap_err();
        assert!(err.starts_with("SUMMARY_IDEAL_LENGTH"));
    }
}
