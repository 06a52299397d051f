//! Timeline aggregation
//!
//! Comments are folded into fixed-width time buckets in a single pass. A bucket
//! is created by its first comment and stays open until the run ends.

use crate::timestamp::bucket_start;
use crate::types::{Comment, CommentFeatures, RhetoricalProfile, TopComment};
use std::collections::BTreeMap;

/// Running totals for one time window
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBucket {
    /// Comments folded into this bucket
    pub count: usize,
    pub sentiment_sum: f64,
    pub rhetoric_sum: RhetoricalProfile,
    /// Highest-voted comment so far; first seen wins ties
    pub top_comment: TopComment,
}

impl Default for TimeBucket {
    fn default() -> Self {
        Self {
            count: 0,
            sentiment_sum: 0.0,
            rhetoric_sum: RhetoricalProfile::default(),
            top_comment: TopComment::sentinel(),
        }
    }
}

impl TimeBucket {
    fn fold(&mut self, comment: &Comment, features: &CommentFeatures) {
        self.count += 1;
        self.sentiment_sum += features.sentiment;
        self.rhetoric_sum += features.rhetoric;

        if comment.votes > self.top_comment.votes {
            self.top_comment = TopComment::from(comment);
        }
    }
}

/// Bucket store keyed by window start (seconds)
#[derive(Debug, Clone)]
pub struct TimelineAggregator {
    window_seconds: u64,
    buckets: BTreeMap<u64, TimeBucket>,
}

impl TimelineAggregator {
    /// Create an aggregator; `window_seconds` must be non-zero
    pub fn new(window_seconds: u64) -> Self {
        Self {
            window_seconds: window_seconds.max(1),
            buckets: BTreeMap::new(),
        }
    }

    /// Fold a comment at `seconds` into its bucket, returning the bucket key
    pub fn add(&mut self, seconds: u64, comment: &Comment, features: &CommentFeatures) -> u64 {
        let key = bucket_start(seconds, self.window_seconds);
        self.buckets.entry(key).or_default().fold(comment, features);
        key
    }

    /// Buckets in ascending time order
    pub fn buckets(&self) -> impl Iterator<Item = (u64, &TimeBucket)> {
        self.buckets.iter().map(|(k, b)| (*k, b))
    }

    pub fn get(&self, key: u64) -> Option<&TimeBucket> {
        self.buckets.get(&key)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn features(sentiment: f64, certainty: f64) -> CommentFeatures {
        CommentFeatures {
            sentiment,
            rhetoric: RhetoricalProfile {
                certainty,
                ..Default::default()
            },
            keywords: vec![],
        }
    }

    #[test]
    fn test_bucketing() {
        let mut timeline = TimelineAggregator::new(30);
        let c = Comment::new("x", "a", 1);

        assert_eq!(timeline.add(135, &c, &features(0.0, 0.3)), 120);
        assert_eq!(timeline.add(149, &c, &features(0.0, 0.3)), 120);
        assert_eq!(timeline.add(150, &c, &features(0.0, 0.3)), 150);
        assert_eq!(timeline.add(5, &c, &features(0.0, 0.3)), 0);

        let keys: Vec<u64> = timeline.buckets().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 120, 150]);
        assert_eq!(timeline.get(120).unwrap().count, 2);
    }

    #[test]
    fn test_sums_accumulate() {
        let mut timeline = TimelineAggregator::new(30);
        let c = Comment::new("x", "a", 0);
        timeline.add(10, &c, &features(0.5, 1.0));
        timeline.add(20, &c, &features(-0.25, 0.3));

        let bucket = timeline.get(0).unwrap();
        assert_eq!(bucket.count, 2);
        assert!((bucket.sentiment_sum - 0.25).abs() < 1e-12);
        assert!((bucket.rhetoric_sum.certainty - 1.3).abs() < 1e-12);
        assert_eq!(bucket.rhetoric_sum.toxicity, 0.0);
    }

    #[test]
    fn test_top_comment_first_wins_ties() {
        let mut timeline = TimelineAggregator::new(30);
        let f = features(0.0, 0.3);
        timeline.add(1, &Comment::new("zero", "a", 0), &f);
        timeline.add(2, &Comment::new("first ten", "b", 10), &f);
        timeline.add(3, &Comment::new("second ten", "c", 10), &f);
        timeline.add(4, &Comment::new("three", "d", 3), &f);

        let top = &timeline.get(0).unwrap().top_comment;
        assert_eq!(top.text, "first ten");
        assert_eq!(top.author.as_deref(), Some("b"));
        assert_eq!(top.votes, 10);
    }

    #[test]
    fn test_negative_votes_keep_placeholder() {
        let mut timeline = TimelineAggregator::new(30);
        timeline.add(1, &Comment::new("buried", "a", -5), &features(0.0, 0.3));

        let top = &timeline.get(0).unwrap().top_comment;
        assert_eq!(top, &TopComment::sentinel());
        assert_eq!(top.author, None);
    }

    #[test]
    fn test_any_comment_replaces_sentinel() {
        let mut timeline = TimelineAggregator::new(30);
        timeline.add(1, &Comment::new("only", "a", 0), &features(0.0, 0.3));
        assert_eq!(timeline.get(0).unwrap().top_comment.text, "only");
    }
}
