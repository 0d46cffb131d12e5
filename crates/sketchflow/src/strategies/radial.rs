//! Radial layout
//!
//! The first node sits at the canvas center. Every other node is spread at
//! equal angles on one circle, starting at 12 o'clock and going clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::{debug, trace};

use crate::core::{DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Hub-and-spoke layout around the first node
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialLayout;

impl RadialLayout {
    pub fn new() -> Self {
        Self
    }

    /// Radius of the outer ring; never negative
    pub fn radius(config: &LayoutConfig) -> f64 {
        (config.canvas_width.min(config.canvas_height) / 2.0 - config.effective_margin()).max(0.0)
    }

    /// Position of ring member `index` out of `count`
    ///
    /// Angles are measured in screen space (y down), so subtracting a quarter
    /// turn puts index 0 straight above the center and increasing angles run
    /// clockwise.
    pub fn ring_point(center: Point, radius: f64, index: usize, count: usize) -> Point {
        let angle = -FRAC_PI_2 + TAU * index as f64 / count.max(1) as f64;
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

impl LayoutAlgorithm for RadialLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        if graph.is_empty() {
            return positions;
        }

        let center = config.center();
        positions.place(graph.node(0), center);

        let ring = graph.node_count() - 1;
        let radius = Self::radius(config);
        debug!(ring, radius, "Placing radial ring");

        for (j, node) in graph.nodes().skip(1).enumerate() {
            let point = Self::ring_point(center, radius, j, ring);
            trace!(node_id = %node.id, x = point.x, y = point.y, "Placing ring node");
            positions.place(node, point);
        }

        positions
    }

    fn name(&self) -> &'static str {
        "radial"
    }
}
