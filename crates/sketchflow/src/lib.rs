//! Sketchflow - Automatic layout for abstract diagram specs
//!
//! A library that takes a renderer-agnostic diagram description (nodes,
//! connections, a named layout strategy) and produces positioned drawing
//! primitives for a canvas renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use sketchflow::render_json;
//!
//! let input = r#"{
//!     "title": "Deploy",
//!     "layout": "flow",
//!     "nodes": [{"id": "build", "label": "Build"}, {"id": "ship", "label": "Ship"}],
//!     "connections": [{"from": "build", "to": "ship"}]
//! }"#;
//! let primitives = render_json(input).unwrap();
//! assert!(primitives.contains("\"type\":\"arrow\""));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual stages:
//!
//! ```rust
//! use sketchflow::prelude::*;
//!
//! let spec = DiagramSpec::new(LayoutStrategy::Tree)
//!     .with_node(DiagramNode::new("root", "Root"))
//!     .with_node(DiagramNode::new("leaf", "Leaf"))
//!     .with_connection(DiagramConnection::new("root", "leaf"));
//!
//! let config = LayoutConfig::default().with_canvas(800.0, 600.0);
//! let positions = compute_layout(&spec, &config);
//! assert!(positions.get("root").unwrap().center.y < positions.get("leaf").unwrap().center.y);
//!
//! let elements = generate_elements(&spec, &positions, &config);
//! let primitives = to_primitives(&elements);
//! assert_eq!(primitives.len(), 5);
//! ```

pub mod core;
pub mod pipeline;
pub mod render;
pub mod strategies;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use crate::pipeline::Pipeline;
pub use crate::render::{PositionedElement, Primitive};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DiagramConnection, DiagramError, DiagramGraph, DiagramNode, DiagramSpec,
        LayoutAlgorithm, LayoutConfig, LayoutStrategy, LineStyle, NodeCategory, Point,
        PositionMap, PositionedNode, ShapeType, Size,
    };
    pub use crate::pipeline::Pipeline;
    pub use crate::render::{
        generate_elements, to_primitives, ElementKind, ElementSource, PositionedElement,
        Primitive, ShapeDims,
    };
    pub use crate::strategies::{
        compute_layout, FlowLayout, GridLayout, MindmapLayout, RadialLayout, TimelineLayout,
        TreeLayout,
    };
}

/// Render a spec to primitives with the default canvas
///
/// Never fails; see [`Pipeline`] for a custom canvas.
///
/// # Example
/// ```rust
/// use sketchflow::{render, DiagramNode, DiagramSpec, LayoutStrategy};
///
/// let spec = DiagramSpec::new(LayoutStrategy::Radial).with_node(DiagramNode::new("hub", "Hub"));
/// let primitives = render(&spec);
/// assert_eq!(primitives.len(), 2);
/// ```
pub fn render(spec: &DiagramSpec) -> Vec<Primitive> {
    Pipeline::default().render(spec)
}

/// Render a JSON spec to a JSON array of primitives
///
/// # Returns
/// * `Ok(String)` - The primitives, serialized
/// * `Err` - If the input is not a well-formed spec
pub fn render_json(input: &str) -> anyhow::Result<String> {
    Pipeline::default().render_json(input)
}

/// Parse a JSON spec without laying it out
///
/// # Example
/// ```rust
/// use sketchflow::{parse_spec, LayoutStrategy};
///
/// let spec = parse_spec(r#"{"layout": "mind-map", "nodes": [{"id": "a"}]}"#).unwrap();
/// assert_eq!(spec.layout, LayoutStrategy::Mindmap);
/// assert_eq!(spec.nodes.len(), 1);
/// ```
pub fn parse_spec(input: &str) -> anyhow::Result<DiagramSpec> {
    Ok(DiagramSpec::from_json(input)?)
}
