//! End-to-end pipeline
//!
//! Runs a spec through every stage: layout → elements → primitives. Each
//! stage opens its own span so a `pretty` or `json` subscriber reports
//! per-stage timings.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{DiagramError, DiagramSpec, LayoutConfig, PositionMap};
use crate::render::{generate_elements, to_primitives, PositionedElement, Primitive};
use crate::strategies::compute_layout;

/// Layout pipeline bound to one canvas configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: LayoutConfig,
}

impl Pipeline {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position every node of the spec
    pub fn layout(&self, spec: &DiagramSpec) -> PositionMap {
        compute_layout(spec, &self.config)
    }

    /// Lay out the spec and generate its drawing elements
    pub fn elements(&self, spec: &DiagramSpec) -> Vec<PositionedElement> {
        let positions = self.layout(spec);
        generate_elements(spec, &positions, &self.config)
    }

    /// Run every stage and return the renderer primitives
    pub fn render(&self, spec: &DiagramSpec) -> Vec<Primitive> {
        let render_span = span!(
            Level::INFO,
            "render_diagram",
            strategy = spec.layout.as_str(),
            node_count = spec.nodes.len()
        );
        let _enter = render_span.enter();

        let elements = self.elements(spec);
        let primitives = to_primitives(&elements);
        info!(primitive_count = primitives.len(), "Pipeline completed");
        primitives
    }

    /// Decode a JSON spec, render it, and encode the primitives as JSON
    pub fn render_json(&self, input: &str) -> Result<String> {
        let spec = DiagramSpec::from_json(input)?;
        debug!(node_count = spec.nodes.len(), "Decoded spec");

        let primitives = self.render(&spec);
        let output = serde_json::to_string(&primitives)
            .map_err(|e| DiagramError::serialize_error(e.to_string()))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiagramConnection, DiagramNode, LayoutStrategy};

    fn sample() -> DiagramSpec {
        DiagramSpec::new(LayoutStrategy::Flow)
            .with_title("Checkout")
            .with_node(DiagramNode::new("cart", "Cart"))
            .with_node(DiagramNode::new("pay", "Pay"))
            .with_connection(DiagramConnection::new("cart", "pay"))
    }

    #[test]
    fn test_default_pipeline_uses_default_config() {
        assert_eq!(Pipeline::default().config(), &LayoutConfig::default());
    }

    #[test]
    fn test_render_counts() {
        // title + arrow + 2 * (shape + label)
        let primitives = Pipeline::default().render(&sample());
        assert_eq!(primitives.len(), 6);
        assert_eq!(primitives[0].type_name(), "text");
        assert_eq!(primitives[1].type_name(), "arrow");
    }

    #[test]
    fn test_custom_canvas_moves_nodes() {
        let small = Pipeline::new(LayoutConfig::default().with_canvas(400.0, 300.0));
        let positions = small.layout(&sample());
        let cart = positions.get("cart").unwrap().center;
        assert!(cart.x < 400.0 && cart.y < 300.0);
    }

    #[test]
    fn test_render_json_rejects_malformed_input() {
        let err = Pipeline::default().render_json("{\"layout\": ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiagramError>(),
            Some(DiagramError::ParseError { .. })
        ));
    }

    #[test]
    fn test_render_json_output_is_array() {
        let output = Pipeline::default()
            .render_json(r#"{"layout": "grid", "nodes": [{"id": "a", "label": "A"}]}"#)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
