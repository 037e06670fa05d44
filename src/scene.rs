//! Render-ready scene description: the contract the graph view consumes.
//!
//! [`build_scene`] is a pure function of the model and the viewport. It hands
//! the view everything it needs in canvas space plus the layer transform
//! (pan and zoom) to apply when compositing; nothing in here mutates the
//! model or the viewport.

use crate::canvas::{Point, Viewport, to_screen};
use crate::graph::{ConnectionKind, STAGE_HEIGHT, STAGE_WIDTH, Workflow};
use crate::routing::{CORNER_RADIUS, rounded_svg_path, route_connection};

/// One stage card, in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSprite {
    pub block_id: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub is_configured: bool,
}

/// One routed connection: the exact waypoints plus the rounded SVG path the
/// view can feed straight into a `<path d="...">`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSprite {
    pub connection_id: String,
    pub kind: ConnectionKind,
    pub waypoints: Vec<Point>,
    pub svg_path: String,
}

impl EdgeSprite {
    /// Stroke dash pattern for this edge's kind. The kind never changes the
    /// routing, only how the stroke is drawn.
    pub fn dash_pattern(&self) -> Option<&'static str> {
        match self.kind {
            ConnectionKind::Sequential => None,
            ConnectionKind::Conditional => Some("8 4"),
            ConnectionKind::Parallel => Some("2 6"),
        }
    }
}

/// Everything the view needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub zoom: f64,
    pub pan: Point,
    pub nodes: Vec<NodeSprite>,
    pub edges: Vec<EdgeSprite>,
}

impl Scene {
    /// Maps a canvas-space point to its final on-screen position, applying
    /// the layer transform. Handy for consumers that do not composite through
    /// a transformed layer (hit testing, minimaps).
    pub fn screen_position(&self, canvas: Point, origin: Point) -> Point {
        to_screen(canvas, origin, self.zoom) + self.pan
    }
}

/// Builds the scene for the current model and viewport. Connections whose
/// endpoints are missing are skipped rather than rendered dangling.
pub fn build_scene(workflow: &Workflow, viewport: &Viewport) -> Scene {
    let nodes = workflow
        .blocks
        .iter()
        .map(|block| NodeSprite {
            block_id: block.id.clone(),
            position: block.position,
            width: STAGE_WIDTH,
            height: STAGE_HEIGHT,
            is_configured: block.is_configured,
        })
        .collect();

    let edges = workflow
        .connections
        .iter()
        .filter_map(|connection| {
            let waypoints = route_connection(workflow, connection)?;
            let svg_path = rounded_svg_path(&waypoints, CORNER_RADIUS);
            Some(EdgeSprite {
                connection_id: connection.id.clone(),
                kind: connection.kind,
                waypoints,
                svg_path,
            })
        })
        .collect();

    Scene {
        zoom: viewport.zoom(),
        pan: viewport.pan(),
        nodes,
        edges,
    }
}
