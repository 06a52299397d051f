//! Pattern-style subjectivity scoring
//!
//! Opinion-bearing words (mostly adjectives) carry a subjectivity weight in
//! [0, 1]. A preceding intensifier scales the weight up. The text score is the
//! mean weight of the opinion words it contains, or 0.0 when it has none.

use super::{strip_punctuation, SubjectivityScorer};
use std::collections::HashMap;

/// Lexicon-backed subjectivity scorer
#[derive(Debug, Clone)]
pub struct PatternSubjectivity {
    weights: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Default for PatternSubjectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSubjectivity {
    pub fn new() -> Self {
        Self {
            weights: WEIGHTS.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
        }
    }
}

impl SubjectivityScorer for PatternSubjectivity {
    fn subjectivity(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|t| strip_punctuation(t).to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0.0;
        let mut assessed = 0usize;
        let mut multiplier = 1.0;

        for word in &words {
            if let Some(&m) = self.intensifiers.get(word) {
                multiplier = m;
                continue;
            }
            if let Some(&weight) = self.weights.get(word) {
                total += (weight * multiplier).min(1.0);
                assessed += 1;
            }
            multiplier = 1.0;
        }

        if assessed == 0 {
            0.0
        } else {
            (total / assessed as f64).clamp(0.0, 1.0)
        }
    }
}

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.4),
    ("incredibly", 1.3),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.2),
    ("super", 1.3),
    ("too", 1.1),
    ("totally", 1.3),
    ("very", 1.3),
];

const WEIGHTS: &[(&str, f64)] = &[
    ("actual", 0.1),
    ("amazing", 0.9),
    ("annoying", 0.8),
    ("awesome", 1.0),
    ("awful", 1.0),
    ("bad", 0.67),
    ("beautiful", 1.0),
    ("best", 0.3),
    ("better", 0.5),
    ("biased", 0.6),
    ("boring", 1.0),
    ("brilliant", 1.0),
    ("clear", 0.38),
    ("clever", 0.75),
    ("confusing", 0.7),
    ("cool", 0.65),
    ("correct", 0.0),
    ("crazy", 0.9),
    ("cute", 1.0),
    ("dumb", 0.5),
    ("easy", 0.83),
    ("excellent", 1.0),
    ("fake", 1.0),
    ("false", 0.65),
    ("fantastic", 0.9),
    ("favorite", 1.0),
    ("fun", 0.2),
    ("funny", 1.0),
    ("good", 0.6),
    ("great", 0.75),
    ("hard", 0.54),
    ("hilarious", 1.0),
    ("horrible", 1.0),
    ("important", 1.0),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("insane", 1.0),
    ("interesting", 0.5),
    ("lovely", 0.75),
    ("misleading", 0.6),
    ("new", 0.45),
    ("nice", 1.0),
    ("obvious", 0.5),
    ("perfect", 1.0),
    ("poor", 0.6),
    ("real", 0.3),
    ("ridiculous", 1.0),
    ("sad", 1.0),
    ("scary", 1.0),
    ("serious", 0.67),
    ("simple", 0.36),
    ("smart", 0.64),
    ("strange", 0.15),
    ("stupid", 1.0),
    ("terrible", 1.0),
    ("true", 0.65),
    ("ugly", 1.0),
    ("useful", 0.0),
    ("weird", 1.0),
    ("wonderful", 1.0),
    ("worst", 1.0),
    ("wrong", 0.9),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_text_scores_zero() {
        let scorer = PatternSubjectivity::new();
        assert_eq!(scorer.subjectivity("the table has four legs"), 0.0);
        assert_eq!(scorer.subjectivity(""), 0.0);
    }

    #[test]
    fn test_mean_of_opinion_words() {
        let scorer = PatternSubjectivity::new();
        // great 0.75, wrong 0.9
        let score = scorer.subjectivity("2:15 this is great! actually the data is wrong");
        assert!((score - 0.825).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_and_caps() {
        let scorer = PatternSubjectivity::new();
        let plain = scorer.subjectivity("good");
        let boosted = scorer.subjectivity("very good");
        assert!((boosted - 0.78).abs() < 1e-9);
        assert!(boosted > plain);
        assert_eq!(scorer.subjectivity("very nice"), 1.0);
    }

    #[test]
    fn test_range() {
        let scorer = PatternSubjectivity::new();
        for text in ["so so so stupid", "correct useful", "Weird!!! BEAUTIFUL."] {
            let score = scorer.subjectivity(text);
            assert!((0.0..=1.0).contains(&score), "{text}: {score}");
        }
    }
}
