//! Drawing element generation
//!
//! Turns a spec and its laid-out positions into an ordered list of drawing
//! elements: the title, then every connection, then every node. Later
//! elements draw over earlier ones, so node shapes cover connection ends.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, span, trace, Level};

use crate::core::{
    estimate_text_width, DiagramSpec, LayoutConfig, LineStyle, Point, PositionMap,
    PositionedNode, ShapeType, CONNECTION_LABEL_COLOR, TEXT_COLOR,
};

/// Dimensions carried by a shape element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeDims {
    /// Circles are described by center and radius
    Radius(f64),
    /// Everything else by top-left corner and box
    Box { width: f64, height: f64 },
}

/// What an element draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    /// A node shape; `origin` is the center for circles and the top-left
    /// corner otherwise
    Shape {
        shape: ShapeType,
        origin: Point,
        dims: ShapeDims,
        color: String,
    },
    /// Text anchored at its top-left corner
    Text {
        origin: Point,
        text: String,
        color: String,
    },
    Arrow {
        start: Point,
        end: Point,
        color: String,
    },
    Line {
        start: Point,
        end: Point,
        style: LineStyle,
        color: String,
    },
}

/// Which part of the spec produced an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "from", rename_all = "lowercase")]
pub enum ElementSource {
    Title,
    /// Index into the spec's connection list
    Connection { index: usize },
    Node { id: String },
}

/// A drawing element and its origin in the spec
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedElement {
    #[serde(flatten)]
    pub kind: ElementKind,
    pub source: ElementSource,
}

impl PositionedElement {
    pub fn new(kind: ElementKind, source: ElementSource) -> Self {
        Self { kind, source }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }
}

/// Text element horizontally centered on `center_x` with its top at `top`
fn centered_text(center_x: f64, top: f64, text: &str, color: &str) -> ElementKind {
    ElementKind::Text {
        origin: Point::new(center_x - estimate_text_width(text) / 2.0, top),
        text: text.to_string(),
        color: color.to_string(),
    }
}

/// Shape element for a laid-out node
///
/// Shapes the canvas cannot draw natively are drawn as rectangles.
fn node_shape(shape: ShapeType, placed: &PositionedNode, color: &str) -> ElementKind {
    match shape.drawable() {
        ShapeType::Circle => ElementKind::Shape {
            shape: ShapeType::Circle,
            origin: placed.center,
            dims: ShapeDims::Radius(circle_radius(placed)),
            color: color.to_string(),
        },
        drawable => ElementKind::Shape {
            shape: drawable,
            origin: placed.top_left(),
            dims: ShapeDims::Box {
                width: placed.size.width,
                height: placed.size.height,
            },
            color: color.to_string(),
        },
    }
}

/// Lowest y of the shape `node_shape` draws for a laid-out node
fn shape_lower_edge(shape: ShapeType, placed: &PositionedNode) -> f64 {
    match shape.drawable() {
        ShapeType::Circle => placed.center.y + circle_radius(placed),
        _ => placed.bottom(),
    }
}

fn circle_radius(placed: &PositionedNode) -> f64 {
    placed.size.width.max(placed.size.height) / 2.0
}

/// Generate drawing elements for a laid-out spec
///
/// Connections whose endpoints are not both positioned are skipped. Nodes
/// are emitted in spec order; a duplicate id only draws its first
/// occurrence.
pub fn generate_elements(
    spec: &DiagramSpec,
    positions: &PositionMap,
    config: &LayoutConfig,
) -> Vec<PositionedElement> {
    let element_span = span!(Level::INFO, "generate_elements", node_count = positions.len());
    let _enter = element_span.enter();

    let mut elements = Vec::with_capacity(1 + spec.connections.len() * 2 + positions.len() * 2);

    if let Some(title) = spec.title_text() {
        elements.push(PositionedElement::new(
            centered_text(config.center().x, config.title_offset, title, TEXT_COLOR),
            ElementSource::Title,
        ));
    }

    let mut skipped = 0usize;
    for (index, connection) in spec.connections.iter().enumerate() {
        let (Some(from), Some(to)) = (positions.get(&connection.from), positions.get(&connection.to))
        else {
            trace!(from = %connection.from, to = %connection.to, "Skipping unresolved connection");
            skipped += 1;
            continue;
        };

        let (start, end) = (from.center, to.center);
        let color = connection.color_name().to_string();
        let style = connection.line_style();
        let kind = if style.has_arrow() {
            ElementKind::Arrow { start, end, color }
        } else {
            ElementKind::Line {
                start,
                end,
                style,
                color,
            }
        };
        elements.push(PositionedElement::new(kind, ElementSource::Connection { index }));

        if let Some(label) = connection.label_text() {
            let mid = start.midpoint(end);
            elements.push(PositionedElement::new(
                centered_text(
                    mid.x,
                    mid.y - config.connection_label_offset,
                    label,
                    CONNECTION_LABEL_COLOR,
                ),
                ElementSource::Connection { index },
            ));
        }
    }

    let mut drawn = HashSet::with_capacity(positions.len());
    for node in &spec.nodes {
        let Some(placed) = positions.get(&node.id) else {
            continue;
        };
        // Duplicate ids share one position; only the first draws
        if !drawn.insert(node.id.as_str()) {
            continue;
        }
        let source = ElementSource::Node {
            id: node.id.clone(),
        };

        let shape = node.shape_type();
        elements.push(PositionedElement::new(
            node_shape(shape, placed, node.color_name()),
            source.clone(),
        ));
        elements.push(PositionedElement::new(
            centered_text(
                placed.center.x,
                shape_lower_edge(shape, placed) + config.label_gap,
                node.display_label(),
                TEXT_COLOR,
            ),
            source,
        ));
    }

    debug!(element_count = elements.len(), skipped, "Generated elements");
    elements
}
