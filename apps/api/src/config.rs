use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::matching::engine::MatchConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Optional newline-delimited file overriding the curated skill phrases.
    pub skill_phrases_path: Option<String>,
    /// Optional newline-delimited file overriding the stop-word list.
    pub stop_words_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_phrases_path: std::env::var("SKILL_PHRASES_PATH").ok(),
            stop_words_path: std::env::var("STOP_WORDS_PATH").ok(),
        })
    }

    /// Builds the matcher configuration, applying any list overrides from disk.
    /// The curated defaults apply wherever no override file is configured.
    pub fn load_match_config(&self) -> Result<MatchConfig> {
        let mut match_config = MatchConfig::default();

        if let Some(path) = &self.skill_phrases_path {
            match_config.skill_phrases = read_list_file(path)
                .with_context(|| format!("failed to load skill phrases from '{path}'"))?;
        }
        if let Some(path) = &self.stop_words_path {
            match_config.stop_words = read_list_file(path)
                .with_context(|| format!("failed to load stop words from '{path}'"))?
                .into_iter()
                .collect::<HashSet<_>>();
        }

        Ok(match_config)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a list file: one entry per line, trimmed and lowercased; blank lines
/// and `#` comments skipped.
fn read_list_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_list_file_trims_lowercases_and_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# curated phrases").unwrap();
        writeln!(file, "Machine Learning").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  rest api  ").unwrap();

        let entries = read_list_file(file.path()).unwrap();
        assert_eq!(entries, vec!["machine learning", "rest api"]);
    }

    #[test]
    fn test_read_list_file_missing_path_errors() {
        assert!(read_list_file("/nonexistent/phrases.txt").is_err());
    }

    #[test]
    fn test_load_match_config_applies_phrase_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "event sourcing").unwrap();

        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            skill_phrases_path: Some(file.path().to_string_lossy().to_string()),
            stop_words_path: None,
        };

        let match_config = config.load_match_config().unwrap();
        assert_eq!(match_config.skill_phrases, vec!["event sourcing"]);
        // Stop words stay at the curated default.
        assert!(match_config.stop_words.contains("required"));
    }
}
