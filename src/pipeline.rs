//! Pipeline orchestration
//!
//! This module provides the public API for comment-pulse. It runs every
//! comment record through timestamp detection, feature extraction,
//! classification and timeline aggregation, then composes the dashboard.

use crate::adapter::{decode_line, parse_line};
use crate::classifier::CommentClassifier;
use crate::config::AnalysisConfig;
use crate::encoder::{to_json, ResultComposer};
use crate::error::AnalysisError;
use crate::features::FeatureExtractor;
use crate::timeline::TimelineAggregator;
use crate::timestamp::{to_seconds, TimestampDetector};
use crate::topics::TopicCounter;
use crate::types::{
    Comment, ConfusionCandidate, DashboardResult, FactCheckCandidate, RunStats, TimedComment,
};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

/// Analyze NDJSON comment records and return the dashboard.
///
/// # Arguments
/// * `ndjson` - One comment JSON object per line
/// * `config` - Run configuration
///
/// # Example
/// ```ignore
/// let dashboard = analyze_ndjson(&input, &AnalysisConfig::default())?;
/// ```
pub fn analyze_ndjson(
    ndjson: &str,
    config: &AnalysisConfig,
) -> Result<DashboardResult, AnalysisError> {
    let mut processor = DashboardProcessor::new(config.clone())?;
    for line in ndjson.lines() {
        processor.process_line(line);
    }
    Ok(processor.finish())
}

/// Read comments from `input`, write the dashboard JSON to `output`.
///
/// The output file is only written once the whole input has been analyzed.
pub fn analyze_file(
    input: &Path,
    output: &Path,
    config: &AnalysisConfig,
) -> Result<RunStats, AnalysisError> {
    let reader = std::io::BufReader::new(std::fs::File::open(input)?);

    let mut processor = DashboardProcessor::new(config.clone())?;
    processor.process_reader(reader)?;
    let stats = processor.stats();
    let dashboard = processor.finish();

    std::fs::write(output, to_json(&dashboard)?)?;
    info!(path = %output.display(), "dashboard written");
    Ok(stats)
}

/// Stateful processor owning all accumulation state of one run.
///
/// Create one per run; [`DashboardProcessor::finish`] consumes it.
pub struct DashboardProcessor {
    detector: TimestampDetector,
    extractor: FeatureExtractor,
    classifier: CommentClassifier,
    timeline: TimelineAggregator,
    topics: TopicCounter,
    composer: ResultComposer,
    fact_checks: Vec<FactCheckCandidate>,
    confusion: Vec<ConfusionCandidate>,
    stats: RunStats,
}

impl DashboardProcessor {
    /// Create a processor with the built-in NLP backends
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let extractor = FeatureExtractor::new(config.features.clone());
        Self::with_extractor(config, extractor)
    }

    /// Create a processor with a custom feature extractor
    pub fn with_extractor(
        config: AnalysisConfig,
        extractor: FeatureExtractor,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;

        Ok(Self {
            detector: TimestampDetector::new()?,
            extractor,
            classifier: CommentClassifier::new(config.classifier.clone()),
            timeline: TimelineAggregator::new(config.timeline.window_seconds),
            topics: TopicCounter::new(),
            composer: ResultComposer::new(&config.timeline),
            fact_checks: Vec::new(),
            confusion: Vec::new(),
            stats: RunStats::default(),
        })
    }

    /// Process every line of `reader`. Only read failures are returned.
    ///
    /// Lines that are not valid UTF-8 are counted as malformed and skipped.
    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> Result<(), AnalysisError> {
        for line in reader.split(b'\n') {
            let line = line?;
            match decode_line(&line) {
                Ok(text) => self.process_line(text),
                Err(e) => self.skip_record(e),
            }
        }
        Ok(())
    }

    /// Process one NDJSON line; malformed records are counted and skipped
    pub fn process_line(&mut self, line: &str) {
        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(comment)) => {
                self.stats.records_read += 1;
                self.process_comment(comment);
            }
            Err(e) => self.skip_record(e),
        }
    }

    fn skip_record(&mut self, e: AnalysisError) {
        self.stats.records_read += 1;
        self.stats.malformed += 1;
        match e {
            AnalysisError::InvalidVotes(_) => warn!(error = %e, "skipping record"),
            _ => debug!(error = %e, "skipping record"),
        }
    }

    /// Run a parsed comment through the pipeline.
    ///
    /// Returns false when the comment has no time marker and was skipped.
    pub fn process_comment(&mut self, comment: Comment) -> bool {
        // Stage 1: Detect and normalize the time marker
        let Some(mark) = self.detector.detect(&comment.text) else {
            self.stats.without_timestamp += 1;
            return false;
        };
        let mark = mark.to_string();
        let seconds = to_seconds(&mark);
        let timed = TimedComment {
            comment,
            mark,
            seconds,
        };

        // Stage 2: Extract features
        let features = self.extractor.extract(&timed.comment.text);

        // Stage 3: Classify into feeds
        if let Some(candidate) = self.classifier.fact_check(&timed) {
            self.fact_checks.push(candidate);
        }
        if let Some(candidate) = self.classifier.confusion(&timed) {
            self.confusion.push(candidate);
        }

        // Stage 4: Accumulate topics and the timeline bucket
        self.topics.update(features.keywords.iter().cloned());
        let bucket = self.timeline.add(timed.seconds, &timed.comment, &features);
        debug!(mark = %timed.mark, bucket, "comment analyzed");

        self.stats.analyzed += 1;
        true
    }

    /// Counters for the records seen so far
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Compose the dashboard from the accumulated state
    pub fn finish(self) -> DashboardResult {
        let dashboard = self.composer.compose(
            &self.timeline,
            &self.topics,
            self.fact_checks,
            self.confusion,
        );

        info!(
            records = self.stats.records_read,
            malformed = self.stats.malformed,
            without_timestamp = self.stats.without_timestamp,
            analyzed = self.stats.analyzed,
            timeline_points = dashboard.timeline_points.len(),
            fact_checks = dashboard.fact_check_feed.len(),
            "analysis complete"
        );

        dashboard
    }
}
