//! Time-marker detection and normalization
//!
//! Comments reference a moment in the video with markers such as "2:15" or
//! "1:02:30". Only the first marker of a comment is used.

use crate::error::AnalysisError;
use regex::Regex;

/// Pattern of an in-video time marker ("M:SS", "MM:SS", "H:MM:SS")
pub const TIMESTAMP_PATTERN: &str = r"\b[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?\b";

/// Finds time markers in comment text
#[derive(Debug, Clone)]
pub struct TimestampDetector {
    pattern: Regex,
}

impl TimestampDetector {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            pattern: Regex::new(TIMESTAMP_PATTERN)?,
        })
    }

    /// First time marker in `text`, if any
    pub fn detect<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }

    pub fn has_timestamp(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Convert "MM:SS" or "HH:MM:SS" to seconds.
///
/// Any other shape, or a non-numeric part, yields 0 so the comment lands in
/// the first bucket. Parts are not range-checked ("1:75" is 135).
pub fn to_seconds(mark: &str) -> u64 {
    let parts: Option<Vec<u64>> = mark.split(':').map(|p| p.parse().ok()).collect();

    match parts.as_deref() {
        Some([minutes, seconds]) => minutes * 60 + seconds,
        Some([hours, minutes, seconds]) => hours * 3600 + minutes * 60 + seconds,
        _ => 0,
    }
}

/// Start of the window containing `seconds`
pub fn bucket_start(seconds: u64, window: u64) -> u64 {
    (seconds / window) * window
}

/// Render a second offset as "M:SS"
pub fn display_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
