//! Orthogonal connection routing.
//!
//! Connections are drawn as Manhattan-style polylines: every segment is either
//! horizontal or vertical. [`route`] computes the exact waypoint sequence for
//! a pair of anchors; [`rounded_svg_path`] post-processes those waypoints into
//! an SVG path string with rounded corners for rendering. Waypoint computation
//! is deterministic and purely arithmetic, so the same anchors always produce
//! the same path.
//!
//! The router is a heuristic, not an obstacle avoider: it does not check
//! whether the path crosses other blocks.

pub mod path;
pub mod router;

pub use path::{CORNER_RADIUS, rounded_svg_path};
pub use router::{ANCHOR_OFFSET, route, route_connection};
