//! Text-analysis capabilities
//!
//! The pipeline consumes three NLP capabilities through traits so any
//! compliant backend can be swapped in:
//!
//! - [`SentimentScorer`]: text → compound polarity in [-1, 1]
//! - [`SubjectivityScorer`]: text → opinion-vs-fact score in [0, 1]
//! - [`PhraseExtractor`]: text → candidate noun phrases
//!
//! The built-in backends are lexicon driven and tuned for short informal text.

mod phrases;
mod sentiment;
mod subjectivity;

pub use phrases::ChunkPhraseExtractor;
pub use sentiment::LexiconSentiment;
pub use subjectivity::PatternSubjectivity;

/// Compound sentiment of a text
pub trait SentimentScorer {
    /// Polarity in [-1.0, 1.0]; 0.0 for neutral or empty text
    fn compound(&self, text: &str) -> f64;
}

/// Subjectivity of a text
pub trait SubjectivityScorer {
    /// 0.0 is objective, 1.0 is fully subjective
    fn subjectivity(&self, text: &str) -> f64;
}

/// Noun-phrase extraction
pub trait PhraseExtractor {
    fn noun_phrases(&self, text: &str) -> Vec<String>;
}

/// Split a token into its core word and strip surrounding punctuation.
///
/// Keeps inner apostrophes and hyphens ("don't", "re-run").
pub(crate) fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// True when every cased character in `word` is uppercase and there is at least one
pub(crate) fn is_all_caps(word: &str) -> bool {
    let mut has_upper = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("great!"), "great");
        assert_eq!(strip_punctuation("\"don't\""), "don't");
        assert_eq!(strip_punctuation("..."), "");
    }

    #[test]
    fn test_is_all_caps() {
        assert!(is_all_caps("WRONG"));
        assert!(is_all_caps("AI!"));
        assert!(!is_all_caps("Wrong"));
        assert!(!is_all_caps("123"));
    }
}
