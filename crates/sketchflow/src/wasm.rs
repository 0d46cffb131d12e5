//! WebAssembly bindings for Sketchflow
//!
//! Browser-facing wrappers around [`Pipeline`]. Every export returns a JSON
//! string; failures come back as `{"error": "..."}` instead of throwing.

use wasm_bindgen::prelude::*;

use crate::core::{DiagramSpec, LayoutConfig, LayoutStrategy};
use crate::pipeline::Pipeline;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Logs go to the browser console
    let _ = crate::core::logging::init_logging(Some("info"), None);
}

fn error_json(message: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": message.to_string() }).to_string()
}

fn render_with(pipeline: &Pipeline, json: &str) -> String {
    pipeline.render_json(json).unwrap_or_else(error_json)
}

/// Render a JSON spec to a JSON array of primitives
#[wasm_bindgen]
pub fn render_spec(json: &str) -> String {
    render_with(&Pipeline::default(), json)
}

/// Render a JSON spec on a canvas of the given size
#[wasm_bindgen]
pub fn render_spec_with_canvas(json: &str, width: f64, height: f64) -> String {
    let config = LayoutConfig::default().with_canvas(width, height);
    render_with(&Pipeline::new(config), json)
}

/// Render a JSON spec to its intermediate drawing elements
#[wasm_bindgen]
pub fn render_elements(json: &str) -> String {
    let spec = match DiagramSpec::from_json(json) {
        Ok(spec) => spec,
        Err(e) => return error_json(e),
    };
    let elements = Pipeline::default().elements(&spec);
    serde_json::to_string(&elements).unwrap_or_else(error_json)
}

/// Names of every layout strategy, as a JSON array
#[wasm_bindgen]
pub fn layout_strategies() -> String {
    let names: Vec<&str> = LayoutStrategy::all().iter().map(|s| s.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(error_json)
}
