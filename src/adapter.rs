//! Adapter for line-delimited comment records
//!
//! Each input line is a JSON object with a `text` field and optional `author`
//! and `votes` fields. Scrapers disagree on the type of `votes`, so both JSON
//! numbers and numeric strings are accepted.

use crate::error::AnalysisError;
use crate::timestamp::TimestampDetector;
use crate::types::{Comment, DEFAULT_AUTHOR};
use serde::Deserialize;
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::debug;

/// A comment record as it appears on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub votes: Option<Value>,
}

impl RawComment {
    /// Convert to a `Comment`, applying field defaults
    pub fn into_comment(self) -> Result<Comment, AnalysisError> {
        let votes = match self.votes {
            Some(value) => parse_votes(&value)?,
            None => 0,
        };

        Ok(Comment {
            text: self.text.unwrap_or_default(),
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            votes,
        })
    }
}

/// Parse a vote count from a JSON number or numeric string
pub fn parse_votes(value: &Value) -> Result<i64, AnalysisError> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| AnalysisError::InvalidVotes(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| AnalysisError::InvalidVotes(format!("{:?}", s))),
        other => Err(AnalysisError::InvalidVotes(other.to_string())),
    }
}

/// Parse one NDJSON line into a comment.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Comment>, AnalysisError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let raw: RawComment = serde_json::from_str(trimmed)
        .map_err(|e| AnalysisError::MalformedRecord(e.to_string()))?;

    raw.into_comment().map(Some)
}

/// Decode one raw input line; invalid UTF-8 makes the record malformed
pub fn decode_line(bytes: &[u8]) -> Result<&str, AnalysisError> {
    std::str::from_utf8(bytes).map_err(|e| AnalysisError::MalformedRecord(e.to_string()))
}

/// Copy the lines of `reader` whose comment text contains a time marker.
///
/// Unparsable lines are dropped. Kept lines are written unchanged. Returns the
/// number of lines written.
pub fn filter_ndjson<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    detector: &TimestampDetector,
) -> Result<usize, AnalysisError> {
    let mut kept = 0;

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let trimmed = match decode_line(&line) {
            Ok(text) => text.trim(),
            Err(e) => {
                debug!(line = line_num + 1, error = %e, "dropping undecodable record");
                continue;
            }
        };
        if trimmed.is_empty() {
            continue;
        }

        let raw: RawComment = match serde_json::from_str(trimmed) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(line = line_num + 1, error = %e, "dropping unparsable record");
                continue;
            }
        };

        let has_marker = raw
            .text
            .as_deref()
            .map(|text| detector.has_timestamp(text))
            .unwrap_or(false);

        if has_marker {
            writeln!(writer, "{}", trimmed)?;
            kept += 1;
        }
    }

    writer.flush()?;
    Ok(kept)
}
