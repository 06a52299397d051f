//! Dashboard encoder
//!
//! Finalizes the accumulated run state into a [`DashboardResult`] and renders
//! it as pretty-printed JSON.

use crate::config::TimelineConfig;
use crate::error::AnalysisError;
use crate::timeline::TimelineAggregator;
use crate::timestamp::display_time;
use crate::topics::TopicCounter;
use crate::types::{ConfusionCandidate, DashboardResult, FactCheckCandidate, TimelinePoint};
use serde::{Deserialize, Serialize};

/// Composes the final dashboard from accumulated state
#[derive(Debug, Clone)]
pub struct ResultComposer {
    top_keywords: usize,
    feed_limit: usize,
}

impl Default for ResultComposer {
    fn default() -> Self {
        Self::new(&TimelineConfig::default())
    }
}

impl ResultComposer {
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            top_keywords: config.top_keywords,
            feed_limit: config.feed_limit,
        }
    }

    /// Build the dashboard from the run's accumulators
    pub fn compose(
        &self,
        timeline: &TimelineAggregator,
        topics: &TopicCounter,
        mut fact_checks: Vec<FactCheckCandidate>,
        mut confusion: Vec<ConfusionCandidate>,
    ) -> DashboardResult {
        let timeline_points = timeline
            .buckets()
            .filter(|(_, bucket)| bucket.count > 0)
            .map(|(seconds, bucket)| {
                let count = bucket.count as f64;
                TimelinePoint {
                    seconds,
                    display_time: display_time(seconds),
                    volume: bucket.count,
                    avg_sentiment: round2(bucket.sentiment_sum / count),
                    rhetorical_profile: bucket.rhetoric_sum.map(|sum| round2(sum / count)),
                    top_comment: bucket.top_comment.clone(),
                }
            })
            .collect();

        // Stable sorts: equal votes keep discovery order
        fact_checks.sort_by(|a, b| b.votes.cmp(&a.votes));
        fact_checks.truncate(self.feed_limit);
        confusion.sort_by(|a, b| b.votes.cmp(&a.votes));
        confusion.truncate(self.feed_limit);

        DashboardResult {
            timeline_points,
            top_keywords: topics.most_common(self.top_keywords),
            fact_check_feed: fact_checks,
            confusion_feed: confusion,
        }
    }
}

/// Render the dashboard as JSON indented with four spaces
pub fn to_json(result: &DashboardResult) -> Result<String, AnalysisError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| AnalysisError::EncodingError(e.to_string()))
}

/// Parse a dashboard previously written by [`to_json`]
pub fn from_json(json: &str) -> Result<DashboardResult, AnalysisError> {
    Ok(serde_json::from_str(json)?)
}

/// Weighted word for the dashboard word cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub text: String,
    /// 1.0 for the top keyword, decreasing linearly with rank
    pub frequency: f64,
}

/// Rank-weighted word-cloud entries for the dashboard's top keywords
pub fn word_cloud(result: &DashboardResult, limit: usize) -> Vec<WordCloudEntry> {
    let n = result.top_keywords.len().min(limit);
    result
        .top_keywords
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, (keyword, _))| WordCloudEntry {
            text: keyword.clone(),
            frequency: 1.0 - i as f64 / n as f64,
        })
        .collect()
}

/// Round to two decimals, ties to even on the exact binary value
fn round2(value: f64) -> f64 {
    // Float formatting is exact, and its output always parses back
    format!("{:.2}", value).parse().unwrap_or(value)
}
