//! Core types for the comment-pulse pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: parsed comments, per-comment features, classified candidates, and
//! the final dashboard output.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Author recorded when a comment does not carry one
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A single comment after record parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub votes: i64,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: impl Into<String>, votes: i64) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            votes,
        }
    }
}

/// A comment that referenced an in-video moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedComment {
    pub comment: Comment,
    /// The time marker exactly as it appeared in the text
    pub mark: String,
    /// The marker normalized to seconds from the start of the video
    pub seconds: u64,
}

/// Six-dimension rhetorical profile of a comment (or an average over many)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RhetoricalProfile {
    /// Emotional intensity (pathos), 0-1
    pub emotional: f64,
    /// Opinion vs. fact, 0-1
    pub subjectivity: f64,
    /// Absolute language, 0.3 or 1.0
    pub certainty: f64,
    /// Links and numbers (logos), 0.2 or 0.8
    pub factual: f64,
    /// Word-count proxy, 0-1
    pub complexity: f64,
    /// Coarse proxy from strongly negative sentiment, 0.1 or 1.0
    pub toxicity: f64,
}

impl RhetoricalProfile {
    /// Dimension names in output order
    pub const DIMENSIONS: [&'static str; 6] = [
        "emotional",
        "subjectivity",
        "certainty",
        "factual",
        "complexity",
        "toxicity",
    ];

    /// Apply `f` to every dimension
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            emotional: f(self.emotional),
            subjectivity: f(self.subjectivity),
            certainty: f(self.certainty),
            factual: f(self.factual),
            complexity: f(self.complexity),
            toxicity: f(self.toxicity),
        }
    }
}

impl AddAssign for RhetoricalProfile {
    fn add_assign(&mut self, rhs: Self) {
        self.emotional += rhs.emotional;
        self.subjectivity += rhs.subjectivity;
        self.certainty += rhs.certainty;
        self.factual += rhs.factual;
        self.complexity += rhs.complexity;
        self.toxicity += rhs.toxicity;
    }
}

/// Features extracted from a single comment
#[derive(Debug, Clone, PartialEq)]
pub struct CommentFeatures {
    /// Compound sentiment score in [-1, 1]
    pub sentiment: f64,
    pub rhetoric: RhetoricalProfile,
    /// Lowercased topic keywords (order not significant)
    pub keywords: Vec<String>,
}

/// Highest-voted comment of a timeline bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopComment {
    /// `None` only for the placeholder of a bucket no comment has outvoted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub text: String,
    pub votes: i64,
}

impl TopComment {
    /// Placeholder that any real comment replaces
    pub fn sentinel() -> Self {
        Self {
            author: None,
            text: String::new(),
            votes: -1,
        }
    }
}

impl From<&Comment> for TopComment {
    fn from(comment: &Comment) -> Self {
        Self {
            author: Some(comment.author.clone()),
            text: comment.text.clone(),
            votes: comment.votes,
        }
    }
}

/// Why a comment landed in the fact-check feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    /// The comment links to an external source
    Source,
    /// The comment corrects the video ("actually ...") and is well upvoted
    Correction,
}

/// Entry of the fact-check feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckCandidate {
    pub time: String,
    pub author: String,
    pub text: String,
    pub votes: i64,
    #[serde(rename = "type")]
    pub kind: CandidateKind,
}

/// Entry of the confusion feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCandidate {
    pub time: String,
    pub text: String,
    pub votes: i64,
}

/// Averaged statistics for one timeline window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Window start, in seconds
    pub seconds: u64,
    /// Window start as "M:SS"
    pub display_time: String,
    /// Number of comments in the window
    pub volume: usize,
    pub avg_sentiment: f64,
    pub rhetorical_profile: RhetoricalProfile,
    pub top_comment: TopComment,
}

/// Final dashboard dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResult {
    pub timeline_points: Vec<TimelinePoint>,
    /// (keyword, occurrences), most frequent first
    pub top_keywords: Vec<(String, usize)>,
    pub fact_check_feed: Vec<FactCheckCandidate>,
    pub confusion_feed: Vec<ConfusionCandidate>,
}

/// Counters describing what happened to the input records of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Non-empty input lines seen
    pub records_read: usize,
    /// Lines skipped because they were not a valid comment record
    pub malformed: usize,
    /// Comments skipped because they reference no video moment
    pub without_timestamp: usize,
    /// Comments folded into the timeline
    pub analyzed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_add_and_map() {
        let mut sum = RhetoricalProfile::default();
        let profile = RhetoricalProfile {
            emotional: 0.5,
            subjectivity: 0.25,
            certainty: 1.0,
            factual: 0.8,
            complexity: 0.1,
            toxicity: 0.1,
        };
        sum += profile;
        sum += profile;

        let avg = sum.map(|v| v / 2.0);
        assert_eq!(avg, profile);
    }

    #[test]
    fn test_profile_serializes_six_dimensions() {
        let value = serde_json::to_value(RhetoricalProfile::default()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 6);
        for name in RhetoricalProfile::DIMENSIONS {
            assert!(value.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_candidate_kind_wire_format() {
        let candidate = FactCheckCandidate {
            time: "1:00".to_string(),
            author: "a".to_string(),
            text: "see http://x".to_string(),
            votes: 2,
            kind: CandidateKind::Source,
        };
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["type"], "Source");
    }

    #[test]
    fn test_placeholder_top_comment_has_no_author_key() {
        let value = serde_json::to_value(TopComment::sentinel()).unwrap();
        assert_eq!(value, serde_json::json!({"text": "", "votes": -1}));

        let real = TopComment::from(&Comment::new("0:10 hi", "", -3));
        let value = serde_json::to_value(&real).unwrap();
        assert_eq!(value["author"], "");
    }

    #[test]
    fn test_sentinel_loses_to_any_comment() {
        let sentinel = TopComment::sentinel();
        let comment = Comment::new("0:10 meh", "bob", 0);
        assert!(comment.votes > sentinel.votes);
    }
}
