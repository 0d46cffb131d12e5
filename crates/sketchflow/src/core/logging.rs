//! Logging infrastructure for diagram layout
//!
//! Structured logging uses the `tracing` crate. Library code only emits
//! spans and events; binaries (the CLI, the wasm module) decide where they
//! go by calling [`init_logging`] once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sketchflow::core::logging::init_logging;
//!
//! init_logging(Some("debug"), Some("pretty")).unwrap();
//! ```
//!
//! # Log Levels
//!
//! - `trace`: per-node placement and dropped connections
//! - `debug`: level assignment, counts per stage
//! - `info`: one line per pipeline run (default)
//! - `warn`: elements the flattener had to drop
//! - `error`: unused by the library
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `SKETCHFLOW_LOG_LEVEL`: log level or filter directive when no level is passed
//! - `RUST_LOG`: consulted after `SKETCHFLOW_LOG_LEVEL`
//! - `SKETCHFLOW_LOG_FORMAT`: log format when no format is passed
//!
//! In the browser build every event goes to the console through
//! `tracing-wasm`, and level and format are ignored.
//!
//! # Filtering Logs
//!
//! ```bash
//! # Only strategy logs at debug level
//! RUST_LOG="sketchflow::strategies=debug" sketchflow layout -i spec.json
//!
//! # Everything at info, element generation at trace
//! RUST_LOG="info,sketchflow::render::elements=trace" sketchflow layout -i spec.json
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Level used when neither an argument nor the environment sets one
pub const DEFAULT_LEVEL: &str = "info";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Pick the filter directive: argument, then `SKETCHFLOW_LOG_LEVEL`, then
/// `RUST_LOG`, then [`DEFAULT_LEVEL`]
pub fn resolve_level(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var("SKETCHFLOW_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Pick the output format: argument, then `SKETCHFLOW_LOG_FORMAT`, then compact
pub fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(str::to_string)
        .or_else(|| std::env::var("SKETCHFLOW_LOG_FORMAT").ok())
    {
        Some(name) => LogFormat::from_str(&name).map_err(|e| format!("Invalid log format: {}", e)),
        None => Ok(LogFormat::default()),
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional filter directive (`debug`, `sketchflow=trace`, `off`, ...).
///   Unparseable directives fall back to [`DEFAULT_LEVEL`].
/// * `format` - Optional log format (compact|pretty|json).
///
/// # Returns
///
/// Returns an error for an unknown format, or if a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let directive = resolve_level(level);
        let format = resolve_format(format)?;

        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        let output: Box<dyn Layer<Registry> + Send + Sync> = match format {
            LogFormat::Compact => tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .compact()
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE)
                .pretty()
                .boxed(),
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE)
                .json()
                .boxed(),
        };

        Registry::default()
            .with(output)
            .with(filter)
            .try_init()?;

        Ok(())
    }
}
