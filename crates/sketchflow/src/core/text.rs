//! Label sizing
//!
//! Text width is estimated from the label's display-column count. No font
//! metrics are consulted, so sizes are identical on every platform.

use unicode_width::UnicodeWidthStr;

use super::geometry::Size;
use super::types::{DiagramNode, ShapeType};

/// Estimated width of one display column
pub const CHAR_WIDTH: f64 = 8.0;

/// Upper bound on estimated text width
pub const MAX_TEXT_WIDTH: f64 = 240.0;

/// Horizontal padding added around a label when widening a shape
pub const LABEL_PADDING: f64 = 32.0;

/// Estimate the rendered width of a label
///
/// Wide characters (CJK, most emoji) count as two columns. The result is
/// capped at [`MAX_TEXT_WIDTH`] so one long label cannot dwarf the canvas.
///
/// # Example
/// ```
/// use sketchflow::core::estimate_text_width;
///
/// assert_eq!(estimate_text_width("Start"), 40.0);
/// assert_eq!(estimate_text_width(&"x".repeat(500)), 240.0);
/// ```
pub fn estimate_text_width(label: &str) -> f64 {
    let columns = UnicodeWidthStr::width(label) as f64;
    (columns * CHAR_WIDTH).min(MAX_TEXT_WIDTH)
}

/// Canonical default box for a shape
pub fn default_shape_size(shape: ShapeType) -> Size {
    match shape {
        ShapeType::Rectangle => Size::new(140.0, 60.0),
        ShapeType::Circle => Size::new(80.0, 80.0),
        ShapeType::Diamond => Size::new(120.0, 80.0),
        ShapeType::Hexagon => Size::new(140.0, 70.0),
        ShapeType::Pill => Size::new(140.0, 50.0),
        ShapeType::Cloud => Size::new(160.0, 90.0),
        ShapeType::Star => Size::new(90.0, 90.0),
    }
}

/// Box large enough for a node's label
///
/// Starts from the canonical size of the node's shape and widens it to the
/// label width plus padding. Height always stays at the canonical value.
pub fn resolve_node_size(node: &DiagramNode) -> Size {
    let base = default_shape_size(node.shape_type());
    let text_width = estimate_text_width(node.display_label()) + LABEL_PADDING;
    Size::new(base.width.max(text_width), base.height)
}
