//! Property-based invariant tests for layout and element generation
//!
//! For any spec the engine accepts:
//!
//! 1. Every unique node gets exactly one position (totality).
//! 2. The same spec and config always give the same output (determinism).
//! 3. Node centers stay inside the canvas margin (bounding).
//! 4. Connection elements never follow node elements (ordering).
//! 5. Node sizes never shrink below the shape's canonical box (sizing).

use proptest::prelude::*;
use sketchflow::prelude::*;
use sketchflow::{default_shape_size, resolve_node_size, MAX_TEXT_WIDTH, LABEL_PADDING};
use std::collections::HashSet;

// ── Helpers ─────────────────────────────────────────────────────────────

fn strategy_strategy() -> impl Strategy<Value = LayoutStrategy> {
    prop::sample::select(LayoutStrategy::all().to_vec())
}

fn shape_strategy() -> impl Strategy<Value = Option<ShapeType>> {
    prop::option::of(prop::sample::select(vec![
        ShapeType::Rectangle,
        ShapeType::Circle,
        ShapeType::Diamond,
        ShapeType::Hexagon,
        ShapeType::Pill,
        ShapeType::Cloud,
        ShapeType::Star,
    ]))
}

fn node_strategy(id_space: usize) -> impl Strategy<Value = DiagramNode> {
    (0..id_space, "[a-zA-Z ]{0,40}", shape_strategy()).prop_map(|(id, label, shape)| {
        let mut node = DiagramNode::new(format!("n{}", id), label);
        node.shape = shape;
        node
    })
}

/// Specs with possible duplicate ids, dangling connections, and cycles
fn spec_strategy() -> impl Strategy<Value = DiagramSpec> {
    (
        strategy_strategy(),
        prop::collection::vec(node_strategy(16), 0..14),
        prop::collection::vec((0usize..18, 0usize..18), 0..20),
        prop::option::of("[a-z ]{0,20}"),
    )
        .prop_map(|(layout, nodes, edges, title)| {
            let mut spec = DiagramSpec::new(layout);
            spec.title = title;
            spec.nodes = nodes;
            spec.connections = edges
                .into_iter()
                .map(|(from, to)| DiagramConnection::new(format!("n{}", from), format!("n{}", to)))
                .collect();
            spec
        })
}

/// Margins range past half the canvas so oversized margins get exercised
fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (200.0f64..2000.0, 200.0f64..2000.0, 0.0f64..1200.0).prop_map(|(w, h, m)| {
        LayoutConfig::default().with_canvas(w, h).with_margin(m)
    })
}

fn unique_ids(spec: &DiagramSpec) -> HashSet<&str> {
    spec.nodes.iter().map(|n| n.id.as_str()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_unique_node_positioned_once(spec in spec_strategy(), config in config_strategy()) {
        let positions = compute_layout(&spec, &config);
        let ids = unique_ids(&spec);

        prop_assert_eq!(positions.len(), ids.len());
        for id in &ids {
            prop_assert!(positions.contains(id), "{} missing under {}", id, spec.layout);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_is_deterministic(spec in spec_strategy()) {
        let pipeline = Pipeline::default();
        prop_assert_eq!(pipeline.render(&spec), pipeline.render(&spec));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Bounding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn centers_stay_inside_margin(spec in spec_strategy(), config in config_strategy()) {
        let positions = compute_layout(&spec, &config);
        let eps = 1e-6;
        let margin = config.effective_margin();
        prop_assert!(margin <= config.margin);
        for node in &positions {
            prop_assert!(node.center.x >= margin - eps, "{:?}", node);
            prop_assert!(node.center.x <= config.canvas_width - margin + eps, "{:?}", node);
            prop_assert!(node.center.y >= margin - eps, "{:?}", node);
            prop_assert!(node.center.y <= config.canvas_height - margin + eps, "{:?}", node);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn connections_drawn_before_nodes(spec in spec_strategy()) {
        let elements = Pipeline::default().elements(&spec);
        let first_node = elements
            .iter()
            .position(|e| matches!(e.source, ElementSource::Node { .. }))
            .unwrap_or(elements.len());
        for element in &elements[first_node..] {
            let is_node = matches!(element.source, ElementSource::Node { .. });
            prop_assert!(is_node);
        }
    }

    #[test]
    fn every_primitive_survives_flattening(spec in spec_strategy()) {
        let elements = Pipeline::default().elements(&spec);
        prop_assert_eq!(to_primitives(&elements).len(), elements.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Sizing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sizes_only_widen(node in node_strategy(4)) {
        let base = default_shape_size(node.shape_type());
        let size = resolve_node_size(&node);

        prop_assert_eq!(size.height, base.height);
        prop_assert!(size.width >= base.width);
        prop_assert!(size.width <= base.width.max(MAX_TEXT_WIDTH + LABEL_PADDING));
        prop_assert_eq!(resolve_node_size(&node), size);
    }
}
