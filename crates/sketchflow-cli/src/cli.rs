//! Command-line interface for the sketchflow utility
//!
//! Provides a CLI to lay out JSON diagram specs into canvas drawing
//! primitives.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use sketchflow::core::logging::init_logging;
use sketchflow::{DiagramSpec, LayoutConfig, LayoutStrategy, Pipeline};

/// Sketchflow - Lay out abstract diagram specs for canvas renderers
#[derive(Parser)]
#[command(name = "sketchflow")]
#[command(about = "Lay out JSON diagram specs into positioned drawing primitives")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); defaults to the environment, then info
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); defaults to the environment, then compact
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lay out a diagram spec and emit drawing primitives as JSON
    Layout {
        /// Input file containing the JSON spec (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the primitives (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the strategy named in the spec
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyChoice>,

        /// Canvas width in logical units
        #[arg(long)]
        canvas_width: Option<f64>,

        /// Canvas height in logical units
        #[arg(long)]
        canvas_height: Option<f64>,

        /// Border kept free on every side of the canvas
        #[arg(long)]
        margin: Option<f64>,

        /// Emit intermediate drawing elements instead of primitives
        #[arg(long)]
        elements: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a diagram spec and report problems
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show available layout strategies
    Strategies {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Layout strategies selectable from the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StrategyChoice {
    Flow,
    Tree,
    Radial,
    Grid,
    #[value(alias = "mind-map")]
    Mindmap,
    Timeline,
}

impl From<StrategyChoice> for LayoutStrategy {
    fn from(value: StrategyChoice) -> Self {
        match value {
            StrategyChoice::Flow => LayoutStrategy::Flow,
            StrategyChoice::Tree => LayoutStrategy::Tree,
            StrategyChoice::Radial => LayoutStrategy::Radial,
            StrategyChoice::Grid => LayoutStrategy::Grid,
            StrategyChoice::Mindmap => LayoutStrategy::Mindmap,
            StrategyChoice::Timeline => LayoutStrategy::Timeline,
        }
    }
}

#[derive(Serialize)]
struct StrategyInfo {
    name: &'static str,
    description: &'static str,
}

/// Problems `validate` reports without failing
pub fn validation_warnings(spec: &DiagramSpec) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for node in &spec.nodes {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            warnings.push(format!(
                "duplicate node id '{}': only the first occurrence is laid out",
                node.id
            ));
        }
    }

    for (index, connection) in spec.connections.iter().enumerate() {
        for endpoint in [&connection.from, &connection.to] {
            if !seen.contains(endpoint.as_str()) {
                warnings.push(format!(
                    "connection {} ({} -> {}) references unknown node '{}' and will be skipped",
                    index, connection.from, connection.to, endpoint
                ));
            }
        }
    }

    warnings
}

/// Main CLI application
pub struct SketchflowApp {
    pipeline: Pipeline,
}

impl SketchflowApp {
    /// Create a new application instance with the default canvas
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a new application instance with a layout config
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config),
        }
    }

    fn build_config(
        canvas_width: Option<f64>,
        canvas_height: Option<f64>,
        margin: Option<f64>,
    ) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        let width = canvas_width.unwrap_or(defaults.canvas_width);
        let height = canvas_height.unwrap_or(defaults.canvas_height);
        let margin = margin.unwrap_or(defaults.margin);
        defaults.with_canvas(width, height).with_margin(margin)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Flags win; unset flags fall through to the environment
        if let Err(e) = init_logging(
            cli.log_level.map(|l| l.as_str()),
            cli.log_format.map(|f| f.as_str()),
        ) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Sketchflow v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Layout {
                input,
                output,
                strategy,
                canvas_width,
                canvas_height,
                margin,
                elements,
                pretty,
            } => {
                let config = Self::build_config(canvas_width, canvas_height, margin);
                self.pipeline = Pipeline::new(config);
                self.layout_command(input, output, strategy, elements, pretty, cli.verbose)
            }
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
            Commands::Strategies { json } => self.strategies_command(json, cli.verbose),
        }
    }

    fn parse(&self, content: &str) -> Result<DiagramSpec> {
        DiagramSpec::from_json(content).context("Failed to parse diagram spec")
    }

    /// Handle the layout command
    fn layout_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        strategy: Option<StrategyChoice>,
        elements: bool,
        pretty: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut spec = self.parse(&content)?;
        if let Some(strategy) = strategy {
            debug!(from = %spec.layout, to = ?strategy, "Overriding layout strategy");
            spec.layout = strategy.into();
        }

        let rendered = if elements {
            let elements = self.pipeline.elements(&spec);
            if pretty {
                serde_json::to_string_pretty(&elements)?
            } else {
                serde_json::to_string(&elements)?
            }
        } else {
            let primitives = self.pipeline.render(&spec);
            if pretty {
                serde_json::to_string_pretty(&primitives)?
            } else {
                serde_json::to_string(&primitives)?
            }
        };

        if verbose {
            eprintln!("Laid out {} nodes with {} layout", spec.nodes.len(), spec.layout);
        }

        self.write_output(output, &rendered)
    }

    /// Handle the validate command
    ///
    /// Only malformed input fails; structural problems are warnings.
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let spec = match self.parse(&content) {
            Ok(spec) => spec,
            Err(e) => {
                println!("✗ Invalid diagram spec: {:#}", e);
                return Err(e);
            }
        };

        let warnings = validation_warnings(&spec);
        for warning in &warnings {
            warn!("{}", warning);
            println!("! {}", warning);
        }
        info!(warnings = warnings.len(), "Validated spec");

        println!(
            "✓ Valid {} diagram: {} nodes, {} connections, {} warnings",
            spec.layout,
            spec.nodes.len(),
            spec.connections.len(),
            warnings.len()
        );
        Ok(())
    }

    /// Handle the strategies command
    fn strategies_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing layout strategies");
        }

        let strategies: Vec<StrategyInfo> = LayoutStrategy::all()
            .iter()
            .map(|s| StrategyInfo {
                name: s.as_str(),
                description: s.description(),
            })
            .collect();

        if json {
            let listing = serde_json::json!({
                "strategies": strategies,
                "default": LayoutStrategy::default().as_str(),
                "total": strategies.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Layout strategies:");
            for strategy in &strategies {
                println!("  {:<10} - {}", strategy.name, strategy.description);
            }
            println!();
            println!(
                "Unknown names fall back to {}",
                LayoutStrategy::default().as_str()
            );
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", content.trim_end_matches('\n'))?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the pipeline (for testing)
    #[cfg(test)]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

impl Default for SketchflowApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const SPEC: &str = r#"{
        "title": "Release",
        "layout": "flow",
        "nodes": [
            {"id": "build", "label": "Build", "category": "process"},
            {"id": "test", "label": "Test", "category": "decision"},
            {"id": "ship", "label": "Ship", "category": "output"}
        ],
        "connections": [
            {"from": "build", "to": "test"},
            {"from": "test", "to": "ship", "label": "pass"}
        ]
    }"#;

    fn write_spec(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("spec.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_parsing_layout_command() {
        let args = vec![
            "sketchflow",
            "layout",
            "--input",
            "spec.json",
            "--output",
            "out.json",
            "--strategy",
            "mind-map",
            "--canvas-width",
            "640",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Layout {
                input,
                output,
                strategy,
                canvas_width,
                canvas_height,
                margin,
                elements,
                pretty,
            } => {
                assert_eq!(input.unwrap().to_string_lossy(), "spec.json");
                assert_eq!(output.unwrap().to_string_lossy(), "out.json");
                assert_eq!(strategy, Some(StrategyChoice::Mindmap));
                assert_eq!(canvas_width, Some(640.0));
                assert!(canvas_height.is_none());
                assert!(margin.is_none());
                assert!(!elements);
                assert!(!pretty);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parsing_rejects_unknown_strategy() {
        let args = vec!["sketchflow", "layout", "--strategy", "spiral"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_log_flags() {
        let args = vec!["sketchflow", "--log-level", "debug", "--log-format", "json", "strategies"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_cli_parsing_log_flags_default_to_environment() {
        let cli = Cli::try_parse_from(vec!["sketchflow", "strategies"]).unwrap();
        assert!(cli.log_level.is_none());
        assert!(cli.log_format.is_none());
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let args = vec!["sketchflow", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Validate { input } => {
                assert!(input.is_none());
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["sketchflow", "--verbose", "strategies"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.verbose);
    }

    #[test]
    fn test_build_config_keeps_unset_defaults() {
        let config = SketchflowApp::build_config(Some(640.0), None, Some(20.0));
        assert_eq!(config.canvas_width, 640.0);
        assert_eq!(config.canvas_height, 800.0);
        assert_eq!(config.margin, 20.0);
    }

    #[test]
    fn test_app_default_canvas() {
        let app = SketchflowApp::default();
        assert_eq!(app.pipeline().config(), &LayoutConfig::default());
    }

    #[test]
    fn test_read_input_from_file() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let path = write_spec(&dir, SPEC);

        let content = app.read_input(Some(path)).unwrap();
        assert_eq!(content, SPEC);
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let err = app
            .read_input(Some(dir.path().join("missing.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_write_output_to_file() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        app.write_output(Some(path.clone()), "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_layout_command_writes_primitives() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let input = write_spec(&dir, SPEC);
        let output = dir.path().join("out.json");

        app.layout_command(Some(input), Some(output.clone()), None, false, false, false)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let primitives = value.as_array().unwrap();
        // title, 2 arrows, 1 connection label, 3 shapes, 3 node labels
        assert_eq!(primitives.len(), 10);
        assert_eq!(primitives[0]["type"], "text");
        assert_eq!(primitives[0]["text"], "Release");
        assert_eq!(primitives[1]["type"], "arrow");
        assert!(primitives.iter().any(|p| p["type"] == "diamond"));
    }

    #[test]
    fn test_layout_command_strategy_override_and_elements() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let input = write_spec(&dir, SPEC);
        let output = dir.path().join("elements.json");

        app.layout_command(
            Some(input),
            Some(output.clone()),
            Some(StrategyChoice::Grid),
            true,
            true,
            false,
        )
        .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let elements = value.as_array().unwrap();
        assert_eq!(elements[0]["source"]["from"], "title");
        assert!(elements.iter().any(|e| e["kind"] == "shape"));
    }

    #[test]
    fn test_layout_command_malformed_spec_fails() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let input = write_spec(&dir, "{\"layout\": \"flow\", \"nodes\": [");
        let output = dir.path().join("out.json");

        let result =
            app.layout_command(Some(input), Some(output.clone()), None, false, false, false);
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_validate_command_accepts_dangling_connections() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let input = write_spec(
            &dir,
            r#"{"layout": "tree", "nodes": [{"id": "a"}], "connections": [{"from": "a", "to": "ghost"}]}"#,
        );
        assert!(app.validate_command(Some(input), false).is_ok());
    }

    #[test]
    fn test_validate_command_rejects_malformed_json() {
        let app = SketchflowApp::new();
        let dir = tempdir().unwrap();
        let input = write_spec(&dir, "not json");
        assert!(app.validate_command(Some(input), false).is_err());
    }

    #[test]
    fn test_validation_warnings() {
        let spec = DiagramSpec::from_json(
            r#"{
                "layout": "grid",
                "nodes": [{"id": "a"}, {"id": "b"}, {"id": "a"}, {"id": "a"}],
                "connections": [{"from": "a", "to": "b"}, {"from": "x", "to": "b"}]
            }"#,
        )
        .unwrap();

        let warnings = validation_warnings(&spec);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("duplicate node id 'a'"));
        assert!(warnings[1].contains("unknown node 'x'"));
    }

    #[test]
    fn test_strategies_command() {
        let app = SketchflowApp::new();
        assert!(app.strategies_command(true, false).is_ok());
        assert!(app.strategies_command(false, false).is_ok());
    }
}
