//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations, and that the pipeline emits events
//! under a subscriber.

use sketchflow::core::logging::{init_logging, resolve_level, LogFormat, DEFAULT_LEVEL};
use sketchflow::prelude::*;
use std::str::FromStr;
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants, &["compact", "pretty", "json"]);
}

#[test]
fn test_default_level_is_info() {
    assert_eq!(DEFAULT_LEVEL, "info");
    assert_eq!(resolve_level(Some("sketchflow=trace")), "sketchflow=trace");
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_twice_does_not_panic() {
    // The second call fails because a global subscriber already exists
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("info"), Some("json"));
}

#[test]
fn test_pipeline_runs_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let spec = DiagramSpec::new(LayoutStrategy::Tree)
        .with_title("Traced")
        .with_node(DiagramNode::new("root", "Root"))
        .with_node(DiagramNode::new("child", "Child"))
        .with_connection(DiagramConnection::new("root", "child"))
        .with_connection(DiagramConnection::new("root", "nowhere"));

    let primitives = Pipeline::default().render(&spec);
    assert_eq!(primitives.len(), 6);
}
