//! Core type definitions for diagram layout
//!
//! This module contains the fundamental types used throughout Sketchflow:
//! node categories, shapes, connection styles, layout strategies, and the
//! diagram spec that ties them together.
//!
//! Every enumerated field deserializes from a plain string and never fails:
//! unknown names land on an explicit default variant. Diagram specs usually
//! come out of a text-generation model, so a typo in a shape name must not
//! reject the whole diagram.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DiagramError;

/// Semantic category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeCategory {
    Primary,
    Secondary,
    Tertiary,
    Input,
    Output,
    Process,
    Decision,
    Data,
    /// Absent or unrecognised category
    #[default]
    Unspecified,
}

impl NodeCategory {
    /// Parse a category name, falling back to [`NodeCategory::Unspecified`]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "primary" => NodeCategory::Primary,
            "secondary" => NodeCategory::Secondary,
            "tertiary" => NodeCategory::Tertiary,
            "input" => NodeCategory::Input,
            "output" => NodeCategory::Output,
            "process" => NodeCategory::Process,
            "decision" => NodeCategory::Decision,
            "data" => NodeCategory::Data,
            _ => NodeCategory::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Primary => "primary",
            NodeCategory::Secondary => "secondary",
            NodeCategory::Tertiary => "tertiary",
            NodeCategory::Input => "input",
            NodeCategory::Output => "output",
            NodeCategory::Process => "process",
            NodeCategory::Decision => "decision",
            NodeCategory::Data => "data",
            NodeCategory::Unspecified => "unspecified",
        }
    }
}

impl From<String> for NodeCategory {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<NodeCategory> for String {
    fn from(value: NodeCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape used to draw a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeType {
    #[default]
    Rectangle,
    Circle,
    Diamond,
    Hexagon,
    /// Rounded rectangle (stadium)
    Pill,
    Cloud,
    Star,
}

impl ShapeType {
    /// Parse a shape name, falling back to [`ShapeType::Rectangle`]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "circle" | "ellipse" => ShapeType::Circle,
            "diamond" | "rhombus" => ShapeType::Diamond,
            "hexagon" => ShapeType::Hexagon,
            "pill" | "stadium" | "rounded" => ShapeType::Pill,
            "cloud" => ShapeType::Cloud,
            "star" => ShapeType::Star,
            _ => ShapeType::Rectangle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Circle => "circle",
            ShapeType::Diamond => "diamond",
            ShapeType::Hexagon => "hexagon",
            ShapeType::Pill => "pill",
            ShapeType::Cloud => "cloud",
            ShapeType::Star => "star",
        }
    }

    /// The shape the canvas renderer actually draws
    ///
    /// The renderer only knows circles, diamonds, and rectangles; every
    /// other shape is drawn as a rectangle.
    pub fn drawable(&self) -> Self {
        match self {
            ShapeType::Circle => ShapeType::Circle,
            ShapeType::Diamond => ShapeType::Diamond,
            _ => ShapeType::Rectangle,
        }
    }
}

impl From<String> for ShapeType {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ShapeType> for String {
    fn from(value: ShapeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line style of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineStyle {
    Solid,
    Dashed,
    Curved,
    #[default]
    Arrow,
}

impl LineStyle {
    /// Parse a line style name, falling back to [`LineStyle::Arrow`]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "solid" => LineStyle::Solid,
            "dashed" | "dotted" => LineStyle::Dashed,
            "curved" => LineStyle::Curved,
            _ => LineStyle::Arrow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Curved => "curved",
            LineStyle::Arrow => "arrow",
        }
    }

    /// Returns true if this style ends in an arrowhead
    pub fn has_arrow(&self) -> bool {
        matches!(self, LineStyle::Arrow)
    }
}

impl From<String> for LineStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<LineStyle> for String {
    fn from(value: LineStyle) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named layout strategy requested by a spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutStrategy {
    /// Left-to-right columns by traversal level
    Flow,
    /// Top-down rows rooted at the first node
    Tree,
    /// First node in the center, the rest on a circle
    Radial,
    /// Near-square grid in spec order
    #[default]
    Grid,
    /// First node in the center, branches alternating left and right
    Mindmap,
    /// Left-to-right zig-zag across the mid-line
    Timeline,
}

impl LayoutStrategy {
    /// Parse a strategy name; anything unrecognised selects [`LayoutStrategy::Grid`]
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "flow" => LayoutStrategy::Flow,
            "tree" => LayoutStrategy::Tree,
            "radial" => LayoutStrategy::Radial,
            "grid" => LayoutStrategy::Grid,
            "mindmap" | "mind-map" | "mind_map" => LayoutStrategy::Mindmap,
            "timeline" => LayoutStrategy::Timeline,
            _ => LayoutStrategy::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStrategy::Flow => "flow",
            LayoutStrategy::Tree => "tree",
            LayoutStrategy::Radial => "radial",
            LayoutStrategy::Grid => "grid",
            LayoutStrategy::Mindmap => "mindmap",
            LayoutStrategy::Timeline => "timeline",
        }
    }

    /// All strategies in a stable order
    pub fn all() -> &'static [LayoutStrategy] {
        &[
            LayoutStrategy::Flow,
            LayoutStrategy::Tree,
            LayoutStrategy::Radial,
            LayoutStrategy::Grid,
            LayoutStrategy::Mindmap,
            LayoutStrategy::Timeline,
        ]
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            LayoutStrategy::Flow => "Columns by traversal level from every root",
            LayoutStrategy::Tree => "Rows by depth below the first node",
            LayoutStrategy::Radial => "First node centered, others on a circle",
            LayoutStrategy::Grid => "Near-square grid in node order",
            LayoutStrategy::Mindmap => "First node centered, branches alternate left and right",
            LayoutStrategy::Timeline => "Left to right, alternating above and below the axis",
        }
    }
}

impl From<String> for LayoutStrategy {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<LayoutStrategy> for String {
    fn from(value: LayoutStrategy) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the diagram with all its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    /// Unique identifier for the node
    pub id: String,
    /// Display label (falls back to the id when empty)
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NodeCategory>,
    /// Explicit shape, overriding the category's shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeType>,
    /// Explicit color name, overriding the category's color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Advisory child ids; layout derives hierarchy from connections instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Opaque caller data, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl DiagramNode {
    /// Create a new node with no category
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: None,
            shape: None,
            color: None,
            children: None,
            metadata: None,
        }
    }

    /// Create a new node in a semantic category
    pub fn with_category(
        id: impl Into<String>,
        label: impl Into<String>,
        category: NodeCategory,
    ) -> Self {
        Self {
            category: Some(category),
            ..Self::new(id, label)
        }
    }

    /// Create a new node with an explicit shape
    pub fn with_shape(id: impl Into<String>, label: impl Into<String>, shape: ShapeType) -> Self {
        Self {
            shape: Some(shape),
            ..Self::new(id, label)
        }
    }

    /// Label to draw; the id stands in for a missing label
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    /// Category, with absent mapped to [`NodeCategory::Unspecified`]
    pub fn category(&self) -> NodeCategory {
        self.category.unwrap_or_default()
    }
}

/// A directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramConnection {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DiagramConnection {
    /// Create a new connection with the default arrow style
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            style: None,
            color: None,
        }
    }

    /// Create a new connection with a specific style
    pub fn with_style(from: impl Into<String>, to: impl Into<String>, style: LineStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::new(from, to)
        }
    }

    /// Create a new connection with a label
    pub fn with_label(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(from, to)
        }
    }

    /// Line style, with absent mapped to [`LineStyle::Arrow`]
    pub fn line_style(&self) -> LineStyle {
        self.style.unwrap_or_default()
    }

    /// Label text, if present and non-blank
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Abstract, renderer-agnostic description of a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Layout strategy selector
    pub layout: LayoutStrategy,
    /// Nodes in meaningful order: first node is the implicit root
    #[serde(default)]
    pub nodes: Vec<DiagramNode>,
    #[serde(default)]
    pub connections: Vec<DiagramConnection>,
    /// Cosmetic theme name, passed through to the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl DiagramSpec {
    /// Create an empty spec with the given strategy
    pub fn new(layout: LayoutStrategy) -> Self {
        Self {
            title: None,
            layout,
            nodes: Vec::new(),
            connections: Vec::new(),
            theme: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_node(mut self, node: DiagramNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_connection(mut self, connection: DiagramConnection) -> Self {
        self.connections.push(connection);
        self
    }

    /// Title text, if present and non-blank
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Parse a spec from JSON
    ///
    /// Only structurally malformed JSON is an error; unknown enum names and
    /// dangling connections are accepted and handled downstream.
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(input).map_err(DiagramError::from_json)
    }

    /// Serialize the spec back to JSON
    pub fn to_json(&self) -> Result<String, DiagramError> {
        serde_json::to_string(self).map_err(|e| DiagramError::serialize_error(e.to_string()))
    }
}
