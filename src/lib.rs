//! comment-pulse - Timeline dashboard analytics for timestamped video comments
//!
//! Pulse turns a stream of video comments into a dashboard dataset through a
//! deterministic single-pass pipeline: record adaptation → timestamp
//! normalization → feature extraction → classification → timeline
//! aggregation → dashboard encoding.
//!
//! ## Modules
//!
//! - **Pipeline**: [`DashboardProcessor`] owns all state of one run
//! - **NLP**: pluggable sentiment, subjectivity and noun-phrase backends

pub mod adapter;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod error;
pub mod features;
pub mod nlp;
pub mod pipeline;
pub mod timeline;
pub mod timestamp;
pub mod topics;
pub mod types;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::{analyze_file, analyze_ndjson, DashboardProcessor};
pub use types::{DashboardResult, RunStats};

/// Pulse version
pub const PULSE_VERSION: &str = env!("CARGO_PKG_VERSION");
