//! Run configuration
//!
//! Every heuristic table and threshold used by the pipeline lives here so it
//! can be tuned from a TOML file without touching control flow. Missing
//! sections and keys fall back to the defaults below.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default time-bucket width in seconds
pub const DEFAULT_WINDOW_SECONDS: u64 = 30;

/// Full configuration for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub io: IoConfig,
    pub timeline: TimelineConfig,
    pub features: FeatureConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

impl AnalysisConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, AnalysisError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize the configuration back to TOML
    pub fn to_toml(&self) -> Result<String, AnalysisError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.timeline.window_seconds == 0 {
            return Err(AnalysisError::ConfigError(
                "timeline.window_seconds must be greater than 0".to_string(),
            ));
        }
        if self.timeline.top_keywords == 0 {
            return Err(AnalysisError::ConfigError(
                "timeline.top_keywords must be greater than 0".to_string(),
            ));
        }
        if self.timeline.feed_limit == 0 {
            return Err(AnalysisError::ConfigError(
                "timeline.feed_limit must be greater than 0".to_string(),
            ));
        }
        if self.features.complexity_word_cap == 0 {
            return Err(AnalysisError::ConfigError(
                "features.complexity_word_cap must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input and output locations (`-` means stdin/stdout)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub input: String,
    pub output: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: "comments_with_timestamps.json".to_string(),
            output: "dashboard_data.json".to_string(),
        }
    }
}

/// Timeline bucketing and ranking limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Bucket width in seconds
    pub window_seconds: u64,
    /// Number of keywords kept in the output
    pub top_keywords: usize,
    /// Number of entries kept in each feed
    pub feed_limit: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window_seconds: DEFAULT_WINDOW_SECONDS,
            top_keywords: 20,
            feed_limit: 10,
        }
    }
}

/// Rhetorical-profile and keyword heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Absolute-language markers (matched as lowercase substrings)
    pub absolute_words: Vec<String>,
    /// Keywords never counted as topics
    pub keyword_stopwords: Vec<String>,
    /// Keywords must be strictly longer than this many characters
    pub min_keyword_chars: usize,
    /// Markers that indicate a link
    pub url_markers: Vec<String>,
    /// Added to emotional intensity when the text contains '!'
    pub exclaim_bonus: f64,
    pub certainty_high: f64,
    pub certainty_low: f64,
    pub factual_high: f64,
    pub factual_low: f64,
    /// Word count at which complexity saturates
    pub complexity_word_cap: usize,
    /// Sentiment strictly below this counts as toxic
    pub toxicity_threshold: f64,
    pub toxicity_high: f64,
    pub toxicity_low: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            absolute_words: to_strings(&[
                "always",
                "never",
                "definitely",
                "proven",
                "fact",
                "wrong",
                "true",
            ]),
            keyword_stopwords: to_strings(&[
                "video", "people", "this", "that", "just", "like", "reaction", "know",
            ]),
            min_keyword_chars: 3,
            url_markers: to_strings(&["http", "www."]),
            exclaim_bonus: 0.2,
            certainty_high: 1.0,
            certainty_low: 0.3,
            factual_high: 0.8,
            factual_low: 0.2,
            complexity_word_cap: 50,
            toxicity_threshold: -0.6,
            toxicity_high: 1.0,
            toxicity_low: 0.1,
        }
    }
}

/// Fact-check and confusion classification rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Case-sensitive marker of a linked source
    pub source_marker: String,
    /// Case-insensitive marker of a correction
    pub correction_marker: String,
    /// Corrections need strictly more votes than this
    pub correction_min_votes: i64,
    /// Fact-check text is cut to this many characters
    pub max_text_chars: usize,
    /// Appended to truncated fact-check text
    pub ellipsis: String,
    pub question_marker: String,
    /// Lowercase prefixes that open a question
    pub question_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            source_marker: "http".to_string(),
            correction_marker: "actually".to_string(),
            correction_min_votes: 5,
            max_text_chars: 150,
            ellipsis: "...".to_string(),
            question_marker: "?".to_string(),
            question_prefixes: to_strings(&["why", "how", "what", "who"]),
        }
    }
}

/// Logging settings consumed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.timeline.window_seconds, 30);
        assert_eq!(config.io.output, "dashboard_data.json");
    }

    #[test]
    fn test_partial_override() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            [timeline]
            window_seconds = 60

            [classifier]
            question_prefixes = ["why", "where"]
            "#,
        )
        .unwrap();

        assert_eq!(config.timeline.window_seconds, 60);
        assert_eq!(config.timeline.feed_limit, 10);
        assert_eq!(config.classifier.question_prefixes, vec!["why", "where"]);
        assert_eq!(config.classifier.correction_marker, "actually");
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = AnalysisConfig::from_toml_str("[timeline]\nwindow_seconds = 0\n");
        assert!(matches!(result, Err(AnalysisError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = AnalysisConfig::from_toml_str("[timeline\nwindow_seconds = ");
        assert!(matches!(result, Err(AnalysisError::TomlError(_))));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = AnalysisConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AnalysisConfig::from_toml_str(&text).unwrap(), config);
    }
}
