//! Comment classification into dashboard feeds
//!
//! A comment may be a fact-check candidate (links a source, or is a
//! well-upvoted "actually ..." correction) and/or a confusion candidate (a
//! question opening with why/how/what/who). The rules are independent.

use crate::config::ClassifierConfig;
use crate::types::{CandidateKind, ConfusionCandidate, FactCheckCandidate, TimedComment};

/// Heuristic comment classifier
pub struct CommentClassifier {
    config: ClassifierConfig,
    correction_marker: String,
}

impl CommentClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        let correction_marker = config.correction_marker.to_lowercase();
        Self {
            config,
            correction_marker,
        }
    }

    /// Fact-check candidate for this comment, if it qualifies
    pub fn fact_check(&self, timed: &TimedComment) -> Option<FactCheckCandidate> {
        let comment = &timed.comment;
        let has_source = comment.text.contains(self.config.source_marker.as_str());
        let is_correction = comment.text.to_lowercase().contains(&self.correction_marker)
            && comment.votes > self.config.correction_min_votes;

        if !has_source && !is_correction {
            return None;
        }

        Some(FactCheckCandidate {
            time: timed.mark.clone(),
            author: comment.author.clone(),
            text: self.truncate(&comment.text),
            votes: comment.votes,
            kind: if has_source {
                CandidateKind::Source
            } else {
                CandidateKind::Correction
            },
        })
    }

    /// Confusion candidate for this comment, if it qualifies
    pub fn confusion(&self, timed: &TimedComment) -> Option<ConfusionCandidate> {
        let comment = &timed.comment;
        if !comment.text.contains(self.config.question_marker.as_str()) {
            return None;
        }

        let lower = comment.text.to_lowercase();
        let opens_question = self
            .config
            .question_prefixes
            .iter()
            .any(|prefix| lower.starts_with(prefix.as_str()));

        opens_question.then(|| ConfusionCandidate {
            time: timed.mark.clone(),
            text: comment.text.clone(),
            votes: comment.votes,
        })
    }

    fn truncate(&self, text: &str) -> String {
        let limit = self.config.max_text_chars;
        match text.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}{}", &text[..cut], self.config.ellipsis),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Comment;
    use pretty_assertions::assert_eq;

    fn timed(text: &str, votes: i64) -> TimedComment {
        TimedComment {
            comment: Comment::new(text, "viewer", votes),
            mark: "2:15".to_string(),
            seconds: 135,
        }
    }

    fn classifier() -> CommentClassifier {
        CommentClassifier::new(ClassifierConfig::default())
    }

    #[test]
    fn test_correction_needs_votes() {
        let c = classifier();
        let candidate = c
            .fact_check(&timed("2:15 this is great! actually the data is wrong", 10))
            .unwrap();
        assert_eq!(candidate.kind, CandidateKind::Correction);
        assert_eq!(candidate.time, "2:15");
        assert_eq!(candidate.author, "viewer");

        assert!(c.fact_check(&timed("2:15 Actually no", 5)).is_none());
        assert!(c.fact_check(&timed("2:15 ACTUALLY no", 6)).is_some());
    }

    #[test]
    fn test_source_ignores_votes() {
        let candidate = classifier()
            .fact_check(&timed("2:15 actually see https://example.org", 0))
            .unwrap();
        assert_eq!(candidate.kind, CandidateKind::Source);
    }

    #[test]
    fn test_source_marker_is_case_sensitive() {
        assert!(classifier().fact_check(&timed("2:15 HTTP is a protocol", 0)).is_none());
    }

    #[test]
    fn test_fact_check_truncation() {
        let long = format!("0:10 http://a.b {}", "é".repeat(200));
        let candidate = classifier().fact_check(&timed(&long, 1)).unwrap();
        assert_eq!(candidate.text.chars().count(), 153);
        assert!(candidate.text.ends_with("..."));

        let exact = format!("http{}", "x".repeat(146));
        assert_eq!(exact.chars().count(), 150);
        assert_eq!(classifier().fact_check(&timed(&exact, 1)).unwrap().text, exact);
    }

    #[test]
    fn test_confusion_rule() {
        let c = classifier();
        let candidate = c.confusion(&timed("why does this happen?", 3)).unwrap();
        assert_eq!(candidate.text, "why does this happen?");
        assert_eq!(candidate.votes, 3);
        assert!(c.fact_check(&timed("why does this happen?", 3)).is_none());

        assert!(c.confusion(&timed("How is this legal?", 0)).is_some());
        assert!(c.confusion(&timed("why does this happen", 3)).is_none());
        assert!(c.confusion(&timed("1:00 why does this happen?", 3)).is_none());
        assert!(c.confusion(&timed("where is it?", 3)).is_none());
    }

    #[test]
    fn test_confusion_text_not_truncated() {
        let long = format!("what {}?", "y".repeat(300));
        let candidate = classifier().confusion(&timed(&long, 0)).unwrap();
        assert_eq!(candidate.text, long);
    }
}
