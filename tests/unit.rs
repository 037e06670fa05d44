//! Unit tests for the graph model, coordinate transforms, and the router.
mod common;
use common::*;
use flowstage::graph::{GRID_ORIGIN, STAGE_GAP, STAGE_HEIGHT, STAGE_WIDTH};
use flowstage::prelude::*;
use flowstage::routing::CORNER_RADIUS;

#[test]
fn test_grid_packing_three_columns() {
    let (workflow, ids) = workflow_with_stages(4);

    let positions: Vec<Point> = ids
        .iter()
        .map(|id| workflow.block(id).unwrap().position)
        .collect();

    assert_eq!(positions[0], Point::new(100.0, 100.0));
    assert_eq!(
        positions[1],
        Point::new(100.0 + (STAGE_WIDTH + STAGE_GAP), 100.0)
    );
    assert_eq!(
        positions[2],
        Point::new(100.0 + 2.0 * (STAGE_WIDTH + STAGE_GAP), 100.0)
    );
    // Fourth stage wraps to row 1, column 0.
    assert_eq!(
        positions[3],
        Point::new(100.0, 100.0 + (STAGE_HEIGHT + STAGE_GAP))
    );
    assert_eq!(GRID_ORIGIN, Point::new(100.0, 100.0));
}

#[test]
fn test_to_canvas_ignores_pan_and_divides_by_zoom() {
    let origin = Point::new(50.0, 50.0);
    let canvas = to_canvas(Point::new(250.0, 150.0), origin, 2.0);
    assert_eq!(canvas, Point::new(100.0, 50.0));

    // to_screen is the exact inverse.
    assert_eq!(to_screen(canvas, origin, 2.0), Point::new(250.0, 150.0));
}

#[test]
fn test_point_clamping() {
    assert_eq!(
        Point::new(-5.0, 12.0).clamped_non_negative(),
        Point::new(0.0, 12.0)
    );
    assert_eq!(
        Point::new(-1.0, -1.0).clamped_non_negative(),
        Point::ZERO
    );
}

#[test]
fn test_zoom_bounds_hold_under_repeated_stepping() {
    let mut viewport = Viewport::default();
    for _ in 0..30 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), 0.3);

    for _ in 0..40 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), 2.0);
}

#[test]
fn test_horizontal_first_route() {
    let waypoints = route(
        Point::new(0.0, 0.0),
        AnchorSide::Right,
        Point::new(200.0, 100.0),
        AnchorSide::Left,
    );

    assert_eq!(
        waypoints,
        vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(160.0, 100.0),
            Point::new(200.0, 100.0),
        ]
    );
    // Horizontal-first: the first segment leaves along the x axis.
    assert_eq!(waypoints[0].y, waypoints[1].y);
}

#[test]
fn test_vertical_first_route_collapses_colinear_points() {
    let waypoints = route(
        Point::new(0.0, 0.0),
        AnchorSide::Bottom,
        Point::new(0.0, 300.0),
        AnchorSide::Top,
    );

    // The two midline waypoints coincide and are deduplicated.
    assert_eq!(
        waypoints,
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(0.0, 150.0),
            Point::new(0.0, 260.0),
            Point::new(0.0, 300.0),
        ]
    );
}

#[test]
fn test_coincident_anchors_still_route() {
    let p = Point::new(10.0, 20.0);
    let waypoints = route(p, AnchorSide::Right, p, AnchorSide::Right);

    // Degenerate but valid: out and back.
    assert!(waypoints.len() >= 2);
    assert_eq!(waypoints.first(), Some(&p));
    assert_eq!(waypoints.last(), Some(&p));
}

#[test]
fn test_anchor_points_sit_on_the_block_perimeter() {
    let position = Point::new(100.0, 100.0);
    assert_eq!(
        AnchorSide::Top.anchor_point(position),
        Point::new(100.0 + STAGE_WIDTH / 2.0, 100.0)
    );
    assert_eq!(
        AnchorSide::Right.anchor_point(position),
        Point::new(100.0 + STAGE_WIDTH, 100.0 + STAGE_HEIGHT / 2.0)
    );
    assert_eq!(
        AnchorSide::Bottom.anchor_point(position),
        Point::new(100.0 + STAGE_WIDTH / 2.0, 100.0 + STAGE_HEIGHT)
    );
    assert_eq!(
        AnchorSide::Left.anchor_point(position),
        Point::new(100.0, 100.0 + STAGE_HEIGHT / 2.0)
    );
}

#[test]
fn test_rounded_svg_path() {
    assert_eq!(rounded_svg_path(&[], CORNER_RADIUS), "");
    assert_eq!(rounded_svg_path(&[Point::ZERO], CORNER_RADIUS), "");

    let line = rounded_svg_path(&[Point::ZERO, Point::new(10.0, 0.0)], CORNER_RADIUS);
    assert_eq!(line, "M 0 0 L 10 0");

    let elbow = rounded_svg_path(
        &[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ],
        8.0,
    );
    assert_eq!(elbow, "M 0 0 L 92 0 Q 100 0 100 8 L 100 100");
}

#[test]
fn test_cascade_delete_removes_touching_connections() {
    let (mut workflow, ids) = workflow_with_stages(3);
    let (a, b, c) = (&ids[0], &ids[1], &ids[2]);

    workflow
        .connect(a, b, AnchorSide::Right, AnchorSide::Left, ConnectionKind::Sequential)
        .unwrap();
    workflow
        .connect(b, c, AnchorSide::Right, AnchorSide::Left, ConnectionKind::Sequential)
        .unwrap();
    workflow
        .connect(a, c, AnchorSide::Bottom, AnchorSide::Top, ConnectionKind::Conditional)
        .unwrap();

    workflow.remove_block(b);

    assert_eq!(workflow.blocks.len(), 2);
    assert_eq!(workflow.connections.len(), 1);
    let survivor = &workflow.connections[0];
    assert_eq!(&survivor.from, a);
    assert_eq!(&survivor.to, c);
}

#[test]
fn test_connect_refuses_self_loops_and_unknown_blocks() {
    let (mut workflow, ids) = workflow_with_stages(2);
    let a = &ids[0];

    assert!(
        workflow
            .connect(a, a, AnchorSide::Top, AnchorSide::Bottom, ConnectionKind::Sequential)
            .is_none()
    );
    assert!(
        workflow
            .connect(a, "missing", AnchorSide::Top, AnchorSide::Bottom, ConnectionKind::Sequential)
            .is_none()
    );
    assert!(workflow.connections.is_empty());
}

#[test]
fn test_move_block_clamps_to_non_negative() {
    let (mut workflow, ids) = workflow_with_stages(1);

    assert!(workflow.move_block(&ids[0], Point::new(-250.0, 40.0)));
    assert_eq!(
        workflow.block(&ids[0]).unwrap().position,
        Point::new(0.0, 40.0)
    );
    assert!(!workflow.move_block("missing", Point::ZERO));
}

#[test]
fn test_prune_dangling_connections() {
    let (mut workflow, ids) = workflow_with_stages(2);
    workflow
        .connect(
            &ids[0],
            &ids[1],
            AnchorSide::Right,
            AnchorSide::Left,
            ConnectionKind::Sequential,
        )
        .unwrap();

    // Simulate a stale record: the block vanished but its edge survived.
    workflow.blocks.retain(|b| b.id != ids[1]);

    assert_eq!(workflow.prune_dangling_connections(), 1);
    assert!(workflow.connections.is_empty());
    assert_eq!(workflow.prune_dangling_connections(), 0);
}

#[test]
fn test_wire_shape_uses_camel_case() {
    let (mut workflow, ids) = workflow_with_stages(2);
    workflow
        .connect(
            &ids[0],
            &ids[1],
            AnchorSide::Right,
            AnchorSide::Left,
            ConnectionKind::Conditional,
        )
        .unwrap();

    let value = serde_json::to_value(&workflow).unwrap();
    assert!(value.get("isLocked").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());

    let block = &value["blocks"][0];
    assert!(block.get("isConfigured").is_some());
    assert_eq!(block["position"]["x"], 100.0);

    let connection = &value["connections"][0];
    assert_eq!(connection["fromNode"], "right");
    assert_eq!(connection["toNode"], "left");
    assert_eq!(connection["type"], "conditional");
}

#[test]
fn test_error_display() {
    let err = EditError::WorkflowLocked {
        name: "Denim QA".to_string(),
    };
    assert!(err.to_string().contains("Denim QA"));
    assert!(err.to_string().contains("locked"));

    let store_err = StoreError::WorkflowNotFound {
        workflow_id: "wf-1".to_string(),
    };
    assert!(store_err.to_string().contains("wf-1"));
}
