//! Timeline layout
//!
//! Nodes run left to right in spec order and zig-zag across the horizontal
//! mid-line: even positions above, odd positions below.

use tracing::{debug, trace};

use crate::core::{Axis, DiagramGraph, LayoutAlgorithm, LayoutConfig, Point, PositionMap};

/// Chronological left-to-right layout
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineLayout;

impl TimelineLayout {
    pub fn new() -> Self {
        Self
    }

    /// Vertical distance from the mid-line, kept inside the usable height
    pub fn amplitude(config: &LayoutConfig) -> f64 {
        config
            .timeline_amplitude
            .min(config.usable_height() / 2.0)
            .max(0.0)
    }
}

impl LayoutAlgorithm for TimelineLayout {
    fn layout(&self, graph: &DiagramGraph<'_>, config: &LayoutConfig) -> PositionMap {
        let mut positions = PositionMap::with_capacity(graph.node_count());
        let count = graph.node_count();
        let mid = config.center().y;
        let amplitude = Self::amplitude(config);
        debug!(count, amplitude, "Placing timeline");

        for (index, node) in graph.nodes().enumerate() {
            let x = config.slot(Axis::Horizontal, index, count);
            let y = if index % 2 == 0 {
                mid - amplitude
            } else {
                mid + amplitude
            };
            trace!(node_id = %node.id, x, y, "Placing timeline node");
            positions.place(node, Point::new(x, y));
        }

        positions
    }

    fn name(&self) -> &'static str {
        "timeline"
    }
}
