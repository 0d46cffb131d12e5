//! Geometry primitives for canvas coordinates
//!
//! Coordinates are logical canvas units with the origin at the top-left
//! corner and y growing downwards.

use serde::Serialize;

/// A point on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of a box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position and size assigned to a node by a layout strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    /// Geometric center of the node
    pub center: Point,
    pub size: Size,
}

impl PositionedNode {
    pub fn new(id: impl Into<String>, center: Point, size: Size) -> Self {
        Self {
            id: id.into(),
            center,
            size,
        }
    }

    /// Top-left corner of the node's box
    pub fn top_left(&self) -> Point {
        Point::new(
            self.center.x - self.size.width / 2.0,
            self.center.y - self.size.height / 2.0,
        )
    }

    /// Y coordinate of the box's lower edge
    pub fn bottom(&self) -> f64 {
        self.center.y + self.size.height / 2.0
    }
}
