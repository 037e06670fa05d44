use crate::canvas::Point;
use crate::graph::{AnchorSide, Connection, Workflow};
use itertools::Itertools;

/// Distance a route travels straight out of an anchor before it is allowed to
/// turn, in canvas units. Keeps the first corner clear of the block edge.
pub const ANCHOR_OFFSET: f64 = 40.0;

/// Computes the orthogonal waypoint polyline between two anchor points.
///
/// Each endpoint is first displaced `ANCHOR_OFFSET` units outward along its
/// side. Routes leaving a top or bottom anchor are *vertical-first*: out to
/// the offset point, vertically to the midline between the two offset points,
/// across horizontally, then into the destination. Routes leaving a left or
/// right anchor are *horizontal-first*, the same shape with axes swapped.
///
/// Consecutive duplicate waypoints are collapsed, so coincident or colinear
/// anchors still yield a valid (possibly degenerate) polyline rather than an
/// error.
pub fn route(from: Point, from_side: AnchorSide, to: Point, to_side: AnchorSide) -> Vec<Point> {
    let (fx, fy) = from_side.outward();
    let (tx, ty) = to_side.outward();
    let exit = Point::new(from.x + fx * ANCHOR_OFFSET, from.y + fy * ANCHOR_OFFSET);
    let entry = Point::new(to.x + tx * ANCHOR_OFFSET, to.y + ty * ANCHOR_OFFSET);

    let waypoints = if from_side.is_vertical() {
        let mid_y = (exit.y + entry.y) / 2.0;
        vec![
            from,
            exit,
            Point::new(exit.x, mid_y),
            Point::new(entry.x, mid_y),
            entry,
            to,
        ]
    } else {
        let mid_x = (exit.x + entry.x) / 2.0;
        vec![
            from,
            exit,
            Point::new(mid_x, exit.y),
            Point::new(mid_x, entry.y),
            entry,
            to,
        ]
    };

    waypoints.into_iter().dedup().collect()
}

/// Routes a connection of a workflow, resolving both anchor positions from the
/// current block positions. Returns `None` when either endpoint block is
/// missing.
pub fn route_connection(workflow: &Workflow, connection: &Connection) -> Option<Vec<Point>> {
    let from_block = workflow.block(&connection.from)?;
    let to_block = workflow.block(&connection.to)?;
    let from = connection.from_node.anchor_point(from_block.position);
    let to = connection.to_node.anchor_point(to_block.position);
    Some(route(from, connection.from_node, to, connection.to_node))
}
