//! Per-comment feature extraction
//!
//! This module derives everything the aggregator needs from a comment's text:
//! - Compound sentiment
//! - The six-dimension rhetorical profile
//! - Topic keywords

use crate::config::FeatureConfig;
use crate::nlp::{
    ChunkPhraseExtractor, LexiconSentiment, PatternSubjectivity, PhraseExtractor,
    SentimentScorer, SubjectivityScorer,
};
use crate::types::{CommentFeatures, RhetoricalProfile};

/// Feature extractor for computing per-comment signals
pub struct FeatureExtractor {
    config: FeatureConfig,
    sentiment: Box<dyn SentimentScorer>,
    subjectivity: Box<dyn SubjectivityScorer>,
    phrases: Box<dyn PhraseExtractor>,
}

impl FeatureExtractor {
    /// Create an extractor backed by the built-in lexicon analyzers
    pub fn new(config: FeatureConfig) -> Self {
        Self::with_backends(
            config,
            Box::new(LexiconSentiment::new()),
            Box::new(PatternSubjectivity::new()),
            Box::new(ChunkPhraseExtractor::new()),
        )
    }

    /// Create an extractor with custom NLP backends
    pub fn with_backends(
        config: FeatureConfig,
        sentiment: Box<dyn SentimentScorer>,
        subjectivity: Box<dyn SubjectivityScorer>,
        phrases: Box<dyn PhraseExtractor>,
    ) -> Self {
        Self {
            config,
            sentiment,
            subjectivity,
            phrases,
        }
    }

    /// Extract all features of a comment
    pub fn extract(&self, text: &str) -> CommentFeatures {
        let sentiment = self.sentiment.compound(text);
        let rhetoric = self.rhetoric(text, sentiment);
        let keywords = self.keywords(text);

        CommentFeatures {
            sentiment,
            rhetoric,
            keywords,
        }
    }

    /// Compute the rhetorical profile given the comment's sentiment
    pub fn rhetoric(&self, text: &str, sentiment: f64) -> RhetoricalProfile {
        RhetoricalProfile {
            emotional: compute_emotional(&self.config, text, sentiment),
            subjectivity: self.subjectivity.subjectivity(text),
            certainty: compute_certainty(&self.config, text),
            factual: compute_factual(&self.config, text),
            complexity: compute_complexity(&self.config, text),
            toxicity: compute_toxicity(&self.config, sentiment),
        }
    }

    /// Lowercased noun phrases that pass the length and stopword filters
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.phrases
            .noun_phrases(text)
            .into_iter()
            .map(|phrase| phrase.to_lowercase())
            .filter(|phrase| phrase.chars().count() > self.config.min_keyword_chars)
            .filter(|phrase| !self.config.keyword_stopwords.iter().any(|s| s == phrase))
            .collect()
    }
}

/// Emotional intensity (pathos): absolute sentiment plus a bonus for '!'
fn compute_emotional(config: &FeatureConfig, text: &str, sentiment: f64) -> f64 {
    let bonus = if text.contains('!') {
        config.exclaim_bonus
    } else {
        0.0
    };
    (sentiment.abs() + bonus).min(1.0)
}

/// Certainty: any absolute-language marker anywhere in the text
fn compute_certainty(config: &FeatureConfig, text: &str) -> f64 {
    let lower = text.to_lowercase();
    if config.absolute_words.iter().any(|w| lower.contains(w.as_str())) {
        config.certainty_high
    } else {
        config.certainty_low
    }
}

/// Factual density (logos): links or numbers
fn compute_factual(config: &FeatureConfig, text: &str) -> f64 {
    let has_link = config.url_markers.iter().any(|m| text.contains(m.as_str()));
    let has_number = text.chars().any(char::is_numeric);
    if has_link || has_number {
        config.factual_high
    } else {
        config.factual_low
    }
}

/// Complexity: word count relative to the saturation cap
fn compute_complexity(config: &FeatureConfig, text: &str) -> f64 {
    let words = text.split_whitespace().count() as f64;
    (words / config.complexity_word_cap as f64).min(1.0)
}

/// Toxicity proxy: strongly negative sentiment
fn compute_toxicity(config: &FeatureConfig, sentiment: f64) -> f64 {
    if sentiment < config.toxicity_threshold {
        config.toxicity_high
    } else {
        config.toxicity_low
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Backend returning fixed scores regardless of text
    pub(crate) struct Fixed {
        pub sentiment: f64,
        pub subjectivity: f64,
        pub phrases: Vec<String>,
    }

    impl SentimentScorer for Fixed {
        fn compound(&self, _text: &str) -> f64 {
            self.sentiment
        }
    }

    impl SubjectivityScorer for Fixed {
        fn subjectivity(&self, _text: &str) -> f64 {
            self.subjectivity
        }
    }

    impl PhraseExtractor for Fixed {
        fn noun_phrases(&self, _text: &str) -> Vec<String> {
            self.phrases.clone()
        }
    }

    pub(crate) fn fixed_extractor(sentiment: f64, phrases: &[&str]) -> FeatureExtractor {
        let fixed = || Fixed {
            sentiment,
            subjectivity: 0.5,
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        };
        FeatureExtractor::with_backends(
            FeatureConfig::default(),
            Box::new(fixed()),
            Box::new(fixed()),
            Box::new(fixed()),
        )
    }

    #[test]
    fn test_emotional_matches_formula() {
        for s in [-1.0, -0.75, -0.3, 0.0, 0.1, 0.5, 0.85, 1.0] {
            let extractor = fixed_extractor(s, &[]);
            for (text, exclaim) in [("0:30 calm remark", 0.0), ("0:30 loud remark!", 0.2)] {
                let emotional = extractor.extract(text).rhetoric.emotional;
                let expected = (f64::abs(s) + exclaim).min(1.0);
                assert!((emotional - expected).abs() < 1e-12, "s={s} text={text}");
                assert!((0.0..=1.0).contains(&emotional));
            }
        }
    }

    #[test]
    fn test_toxicity_threshold() {
        for (s, expected) in [(-1.0, 1.0), (-0.61, 1.0), (-0.6, 0.1), (0.0, 0.1), (0.9, 0.1)] {
            let extractor = fixed_extractor(s, &[]);
            assert_eq!(extractor.extract("1:00 x").rhetoric.toxicity, expected, "s={s}");
        }
    }

    #[test]
    fn test_certainty_and_factual() {
        let extractor = fixed_extractor(0.0, &[]);

        let absolute = extractor.extract("that is Definitely the case");
        assert_eq!(absolute.rhetoric.certainty, 1.0);
        assert_eq!(absolute.rhetoric.factual, 0.2);

        let hedged = extractor.extract("maybe, perhaps");
        assert_eq!(hedged.rhetoric.certainty, 0.3);

        assert_eq!(extractor.extract("see www.example.org").rhetoric.factual, 0.8);
        assert_eq!(extractor.extract("see https://x.y").rhetoric.factual, 0.8);
        assert_eq!(extractor.extract("at 1:00").rhetoric.factual, 0.8);
    }

    #[test]
    fn test_complexity_saturates() {
        let extractor = fixed_extractor(0.0, &[]);
        assert_eq!(extractor.extract("one two three four five").rhetoric.complexity, 0.1);

        let long = vec!["word"; 80].join(" ");
        assert_eq!(extractor.extract(&long).rhetoric.complexity, 1.0);
    }

    #[test]
    fn test_subjectivity_from_backend() {
        let extractor = fixed_extractor(0.0, &[]);
        assert_eq!(extractor.extract("anything").rhetoric.subjectivity, 0.5);
    }

    #[test]
    fn test_keyword_filters() {
        let extractor = fixed_extractor(
            0.0,
            &["Climate Change", "this", "Video", "AI", "tax", "NASA", "reaction"],
        );
        assert_eq!(
            extractor.extract("whatever").keywords,
            vec!["climate change", "nasa"]
        );
    }

    #[test]
    fn test_lexicon_backends_on_sample_comment() {
        let extractor = FeatureExtractor::new(FeatureConfig::default());
        let features = extractor.extract("2:15 this is great! actually the data is wrong");

        assert!(features.rhetoric.emotional >= 0.2);
        assert_eq!(features.rhetoric.certainty, 1.0);
        assert_eq!(features.rhetoric.factual, 0.8);
        assert!((-1.0..=1.0).contains(&features.sentiment));
        assert!(features.rhetoric.toxicity == 0.1 || features.rhetoric.toxicity == 1.0);
    }
}
