//! Layout configuration
//!
//! All strategies place nodes inside one fixed logical canvas. The canvas
//! never grows to fit content; nodes are spread proportionally inside it.

use super::geometry::Point;

/// Canvas and spacing configuration shared by every layout strategy
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Uniform border kept free on every side
    pub margin: f64,
    /// Horizontal distance from the center to each mind-map branch
    pub branch_offset: f64,
    /// Vertical distance from the mid-line to timeline nodes
    pub timeline_amplitude: f64,
    /// Top of the title text
    pub title_offset: f64,
    /// Gap between a shape's lower edge and its label
    pub label_gap: f64,
    /// Lift of a connection label above the connection midpoint
    pub connection_label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            margin: 80.0,
            branch_offset: 320.0,
            timeline_amplitude: 120.0,
            title_offset: 24.0,
            label_gap: 8.0,
            connection_label_offset: 18.0,
        }
    }
}

/// Canvas axis, used to pick a dimension for slot computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canvas size
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width.max(0.0);
        self.canvas_height = height.max(0.0);
        self
    }

    /// Replace the border margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Margin actually applied, at most half the shorter canvas side
    pub fn effective_margin(&self) -> f64 {
        let limit = self.canvas_width.min(self.canvas_height) / 2.0;
        self.margin.min(limit).max(0.0)
    }

    /// Width available for node centers
    pub fn usable_width(&self) -> f64 {
        (self.canvas_width - 2.0 * self.effective_margin()).max(0.0)
    }

    /// Height available for node centers
    pub fn usable_height(&self) -> f64 {
        (self.canvas_height - 2.0 * self.effective_margin()).max(0.0)
    }

    /// Center of the canvas
    pub fn center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Center coordinate of slot `index` out of `count` equal slots on an axis
    ///
    /// Slots divide the usable extent evenly; each node sits in the middle of
    /// its slot so a lone node lands on the canvas center line.
    pub fn slot(&self, axis: Axis, index: usize, count: usize) -> f64 {
        let (start, extent) = match axis {
            Axis::Horizontal => (self.effective_margin(), self.usable_width()),
            Axis::Vertical => (self.effective_margin(), self.usable_height()),
        };
        if count == 0 {
            return start + extent / 2.0;
        }
        start + extent * (index as f64 + 0.5) / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let config = LayoutConfig::default();
        assert_eq!(config.usable_width(), 1040.0);
        assert_eq!(config.usable_height(), 640.0);
        assert_eq!(config.center(), Point::new(600.0, 400.0));
    }

    #[test]
    fn test_single_slot_is_centered() {
        let config = LayoutConfig::default();
        assert_eq!(config.slot(Axis::Horizontal, 0, 1), 600.0);
        assert_eq!(config.slot(Axis::Vertical, 0, 1), 400.0);
    }

    #[test]
    fn test_slots_are_evenly_spaced() {
        let config = LayoutConfig::default().with_canvas(500.0, 500.0).with_margin(50.0);
        let xs: Vec<f64> = (0..4).map(|i| config.slot(Axis::Horizontal, i, 4)).collect();
        assert_eq!(xs, vec![100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_oversized_margin_clamps_extent() {
        let config = LayoutConfig::default().with_canvas(100.0, 100.0).with_margin(80.0);
        assert_eq!(config.effective_margin(), 50.0);
        assert_eq!(config.usable_width(), 0.0);
        assert_eq!(config.slot(Axis::Horizontal, 3, 5), 50.0);
    }

    #[test]
    fn test_margin_limited_by_shorter_side() {
        let config = LayoutConfig::default().with_canvas(400.0, 200.0).with_margin(300.0);
        assert_eq!(config.effective_margin(), 100.0);
        assert_eq!(config.usable_width(), 200.0);
        assert_eq!(config.usable_height(), 0.0);
        assert_eq!(config.slot(Axis::Vertical, 0, 1), 100.0);
        assert_eq!(config.slot(Axis::Horizontal, 0, 1), 200.0);
    }
}
