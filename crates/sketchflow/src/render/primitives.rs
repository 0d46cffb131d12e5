//! Flattening elements into renderer primitives
//!
//! Primitives are the minimal JSON drawing instructions a canvas renderer
//! consumes, each tagged by `"type"`.

use serde::Serialize;
use tracing::{debug, span, warn, Level};

use super::elements::{ElementKind, PositionedElement, ShapeDims};
use crate::core::{LineStyle, Point, ShapeType};

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// `x`, `y` is the center
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    /// `x`, `y` is the top-left corner
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    /// `x`, `y` is the top-left corner of the bounding box
    Diamond {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
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
        color: String,
        style: LineStyle,
    },
}

impl Primitive {
    /// The `"type"` tag this primitive serializes with
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Circle { .. } => "circle",
            Primitive::Rectangle { .. } => "rectangle",
            Primitive::Diamond { .. } => "diamond",
            Primitive::Text { .. } => "text",
            Primitive::Arrow { .. } => "arrow",
            Primitive::Line { .. } => "line",
        }
    }
}

fn flatten(element: &PositionedElement) -> Option<Primitive> {
    let primitive = match &element.kind {
        ElementKind::Shape {
            shape,
            origin,
            dims,
            color,
        } => match (shape.drawable(), *dims) {
            (ShapeType::Circle, ShapeDims::Radius(radius)) => Primitive::Circle {
                x: origin.x,
                y: origin.y,
                radius,
                color: color.clone(),
            },
            (ShapeType::Diamond, ShapeDims::Box { width, height }) => Primitive::Diamond {
                x: origin.x,
                y: origin.y,
                width,
                height,
                color: color.clone(),
            },
            (ShapeType::Rectangle, ShapeDims::Box { width, height }) => Primitive::Rectangle {
                x: origin.x,
                y: origin.y,
                width,
                height,
                color: color.clone(),
            },
            (drawable, dims) => {
                warn!(
                    shape = drawable.as_str(),
                    dims = ?dims,
                    source = ?element.source,
                    "Dropping shape element with mismatched dimensions"
                );
                return None;
            }
        },
        ElementKind::Text {
            origin,
            text,
            color,
        } => Primitive::Text {
            x: origin.x,
            y: origin.y,
            text: text.clone(),
            color: color.clone(),
        },
        ElementKind::Arrow { start, end, color } => Primitive::Arrow {
            start: *start,
            end: *end,
            color: color.clone(),
        },
        ElementKind::Line {
            start,
            end,
            style,
            color,
        } => Primitive::Line {
            start: *start,
            end: *end,
            color: color.clone(),
            style: *style,
        },
    };
    Some(primitive)
}

/// Re-tag elements as primitives, preserving order
///
/// Shape elements whose kind and dimensions disagree are dropped.
pub fn to_primitives(elements: &[PositionedElement]) -> Vec<Primitive> {
    let flatten_span = span!(Level::INFO, "to_primitives", element_count = elements.len());
    let _enter = flatten_span.enter();

    let primitives: Vec<Primitive> = elements.iter().filter_map(flatten).collect();
    debug!(
        primitive_count = primitives.len(),
        dropped = elements.len() - primitives.len(),
        "Flattened elements"
    );
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::elements::ElementSource;
    use serde_json::json;

    fn shape(shape: ShapeType, dims: ShapeDims) -> PositionedElement {
        PositionedElement::new(
            ElementKind::Shape {
                shape,
                origin: Point::new(10.0, 20.0),
                dims,
                color: "blue".to_string(),
            },
            ElementSource::Node { id: "n".to_string() },
        )
    }

    #[test]
    fn test_shapes_retag() {
        let elements = vec![
            shape(ShapeType::Circle, ShapeDims::Radius(40.0)),
            shape(ShapeType::Diamond, ShapeDims::Box { width: 120.0, height: 80.0 }),
            shape(ShapeType::Rectangle, ShapeDims::Box { width: 140.0, height: 60.0 }),
        ];
        let names: Vec<&str> = to_primitives(&elements).iter().map(|p| p.type_name()).collect();
        assert_eq!(names, vec!["circle", "diamond", "rectangle"]);
    }

    #[test]
    fn test_mismatched_shape_dropped() {
        let elements = vec![
            shape(ShapeType::Circle, ShapeDims::Box { width: 10.0, height: 10.0 }),
            shape(ShapeType::Rectangle, ShapeDims::Radius(5.0)),
            shape(ShapeType::Circle, ShapeDims::Radius(5.0)),
        ];
        let primitives = to_primitives(&elements);
        assert_eq!(primitives.len(), 1);
        assert_eq!(primitives[0].type_name(), "circle");
    }

    #[test]
    fn test_circle_json_shape() {
        let primitives = to_primitives(&[shape(ShapeType::Circle, ShapeDims::Radius(40.0))]);
        let value = serde_json::to_value(&primitives[0]).unwrap();
        assert_eq!(
            value,
            json!({"type": "circle", "x": 10.0, "y": 20.0, "radius": 40.0, "color": "blue"})
        );
    }

    #[test]
    fn test_line_json_carries_style() {
        let element = PositionedElement::new(
            ElementKind::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(5.0, 5.0),
                style: LineStyle::Dashed,
                color: "grey".to_string(),
            },
            ElementSource::Connection { index: 0 },
        );
        let value = serde_json::to_value(&to_primitives(&[element])[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "line",
                "start": {"x": 0.0, "y": 0.0},
                "end": {"x": 5.0, "y": 5.0},
                "color": "grey",
                "style": "dashed"
            })
        );
    }
}
