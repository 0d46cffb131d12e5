//! Category lookup tables
//!
//! Maps semantic node categories to the shape and color the canvas renderer
//! draws them with. Color values are the renderer's named palette entries.

use super::types::{DiagramConnection, DiagramNode, NodeCategory, ShapeType};

/// Default color for connections without an explicit color
pub const CONNECTION_COLOR: &str = "grey";

/// Color for the title and node labels
pub const TEXT_COLOR: &str = "black";

/// Color for connection labels
pub const CONNECTION_LABEL_COLOR: &str = "grey";

/// Shape a category is drawn with
pub fn resolve_shape(category: NodeCategory) -> ShapeType {
    match category {
        NodeCategory::Decision => ShapeType::Diamond,
        NodeCategory::Input | NodeCategory::Output => ShapeType::Hexagon,
        NodeCategory::Primary | NodeCategory::Process => ShapeType::Rectangle,
        NodeCategory::Secondary => ShapeType::Pill,
        NodeCategory::Tertiary => ShapeType::Circle,
        NodeCategory::Data => ShapeType::Cloud,
        NodeCategory::Unspecified => ShapeType::Rectangle,
    }
}

/// Color a category is drawn with
pub fn resolve_color(category: NodeCategory) -> &'static str {
    match category {
        NodeCategory::Primary => "blue",
        NodeCategory::Secondary => "violet",
        NodeCategory::Tertiary => "light-violet",
        NodeCategory::Input => "green",
        NodeCategory::Output => "orange",
        NodeCategory::Process => "light-blue",
        NodeCategory::Decision => "yellow",
        NodeCategory::Data => "light-green",
        NodeCategory::Unspecified => "black",
    }
}

impl DiagramNode {
    /// Shape to draw: explicit override first, then the category table
    pub fn shape_type(&self) -> ShapeType {
        self.shape.unwrap_or_else(|| resolve_shape(self.category()))
    }

    /// Color to draw: explicit override first, then the category table
    pub fn color_name(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => resolve_color(self.category()),
        }
    }
}

impl DiagramConnection {
    /// Color to draw the connection with
    pub fn color_name(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => CONNECTION_COLOR,
        }
    }
}
