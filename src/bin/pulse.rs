//! Pulse CLI - Command-line interface for comment-pulse
//!
//! Commands:
//! - analyze: Build the dashboard dataset from NDJSON comments
//! - filter: Keep only comments that reference a video moment
//! - cloud: Export word-cloud weights from a dashboard file
//! - config: Print the effective configuration

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use comment_pulse::adapter::filter_ndjson;
use comment_pulse::encoder::{from_json, to_json, word_cloud};
use comment_pulse::timestamp::TimestampDetector;
use comment_pulse::{AnalysisConfig, AnalysisError, DashboardProcessor, PULSE_VERSION};

/// Pulse - Timeline dashboard analytics for timestamped video comments
#[derive(Parser)]
#[command(name = "pulse")]
#[command(version = PULSE_VERSION)]
#[command(about = "Turn timestamped video comments into a dashboard dataset", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze comments and write the dashboard JSON
    Analyze {
        /// Input NDJSON file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output JSON file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Timeline bucket width in seconds
        #[arg(long)]
        window: Option<u64>,
    },

    /// Keep only comments whose text contains a timestamp
    Filter {
        /// Input NDJSON file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output NDJSON file (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print word-cloud weights for a dashboard's top keywords
    Cloud {
        /// Dashboard JSON file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of words
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PulseCliError> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    init_logging(level);

    match cli.command {
        Commands::Analyze {
            input,
            output,
            window,
        } => cmd_analyze(config, input, output, window),

        Commands::Filter { input, output } => cmd_filter(&input, &output),

        Commands::Cloud { input, limit } => cmd_cloud(&input, limit),

        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},comment_pulse={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn cmd_analyze(
    mut config: AnalysisConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    window: Option<u64>,
) -> Result<(), PulseCliError> {
    if let Some(window) = window {
        config.timeline.window_seconds = window;
    }
    let input = input.unwrap_or_else(|| PathBuf::from(&config.io.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&config.io.output));

    info!(input = %input.display(), window = config.timeline.window_seconds, "starting analysis");

    let mut processor = DashboardProcessor::new(config)?;
    processor.process_reader(open_input(&input)?)?;

    let stats = processor.stats();
    if stats.analyzed == 0 {
        warn!("no comments with timestamps found in input");
    }

    let dashboard = processor.finish();
    write_output(&output, &to_json(&dashboard)?)?;

    info!(
        fact_checks = dashboard.fact_check_feed.len(),
        timeline_points = dashboard.timeline_points.len(),
        output = %output.display(),
        "analysis complete"
    );
    Ok(())
}

fn cmd_filter(input: &Path, output: &Path) -> Result<(), PulseCliError> {
    let detector = TimestampDetector::new()?;
    let reader = open_input(input)?;

    let kept = if is_stdio(output) {
        filter_ndjson(reader, io::stdout().lock(), &detector)?
    } else {
        // Filter into memory so a failed run leaves no partial file
        let mut buffer = Vec::new();
        let kept = filter_ndjson(reader, &mut buffer, &detector)?;
        fs::write(output, buffer)?;
        kept
    };

    info!(kept, output = %output.display(), "filtered comments with timestamps");
    Ok(())
}

fn cmd_cloud(input: &Path, limit: usize) -> Result<(), PulseCliError> {
    let json = if is_stdio(input) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let dashboard = from_json(&json)?;
    let entries = word_cloud(&dashboard, limit);
    println!(
        "{}",
        serde_json::to_string_pretty(&entries).map_err(AnalysisError::from)?
    );
    Ok(())
}

// Helper functions

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, PulseCliError> {
    if is_stdio(path) {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(fs::File::open(path)?)))
    }
}

fn write_output(path: &Path, data: &str) -> Result<(), PulseCliError> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", data)?;
        stdout.flush()?;
    } else {
        fs::write(path, data)?;
    }
    Ok(())
}

// Error types

#[derive(Debug, Error)]
enum PulseCliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PulseCliError> for CliError {
    fn from(e: PulseCliError) -> Self {
        let message = e.to_string();
        let (code, hint) = match e {
            PulseCliError::Io(_) | PulseCliError::Analysis(AnalysisError::Io(_)) => {
                ("IO_ERROR", Some("Check file paths and permissions"))
            }
            PulseCliError::Analysis(AnalysisError::ConfigError(_))
            | PulseCliError::Analysis(AnalysisError::TomlError(_)) => {
                ("CONFIG_ERROR", Some("Run 'pulse config' to see valid settings"))
            }
            PulseCliError::Analysis(AnalysisError::JsonError(_)) => {
                ("JSON_ERROR", Some("Check that the input is a dashboard written by 'pulse analyze'"))
            }
            PulseCliError::Analysis(_) => ("ANALYSIS_ERROR", None),
        };

        CliError {
            code: code.to_string(),
            message,
            hint: hint.map(str::to_string),
        }
    }
}
