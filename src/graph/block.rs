use crate::canvas::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rendered width of a stage card in canvas units.
pub const STAGE_WIDTH: f64 = 600.0;
/// Rendered height of a stage card in canvas units.
pub const STAGE_HEIGHT: f64 = 600.0;
/// Spacing between grid-packed stage cards.
pub const STAGE_GAP: f64 = 80.0;
/// Number of columns used when packing newly added stages.
pub const GRID_COLUMNS: usize = 3;
/// Canvas position of the first grid slot.
pub const GRID_ORIGIN: Point = Point { x: 100.0, y: 100.0 };

/// One of the four fixed connection anchors on a stage card's perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl AnchorSide {
    /// Unit direction pointing away from the block on this side.
    pub fn outward(self) -> (f64, f64) {
        match self {
            AnchorSide::Top => (0.0, -1.0),
            AnchorSide::Right => (1.0, 0.0),
            AnchorSide::Bottom => (0.0, 1.0),
            AnchorSide::Left => (-1.0, 0.0),
        }
    }

    /// True for top/bottom anchors, whose routes leave the block vertically.
    pub fn is_vertical(self) -> bool {
        matches!(self, AnchorSide::Top | AnchorSide::Bottom)
    }

    /// The anchor's canvas position for a block whose top-left corner sits at
    /// `block_position`.
    pub fn anchor_point(self, block_position: Point) -> Point {
        match self {
            AnchorSide::Top => Point::new(block_position.x + STAGE_WIDTH / 2.0, block_position.y),
            AnchorSide::Right => Point::new(
                block_position.x + STAGE_WIDTH,
                block_position.y + STAGE_HEIGHT / 2.0,
            ),
            AnchorSide::Bottom => Point::new(
                block_position.x + STAGE_WIDTH / 2.0,
                block_position.y + STAGE_HEIGHT,
            ),
            AnchorSide::Left => Point::new(block_position.x, block_position.y + STAGE_HEIGHT / 2.0),
        }
    }
}

/// A node in the workflow graph representing one pipeline stage.
///
/// The `data` payload belongs to the external stage-configuration wizard; the
/// core stores it verbatim and never inspects its contents. `is_configured`
/// flips to `true` the first time the wizard completes for this block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBlock {
    pub id: String,
    pub position: Point,
    pub is_configured: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl StageBlock {
    /// Creates an unconfigured block at the given canvas position with a fresh
    /// unique id.
    pub fn new(position: Point) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            position: position.clamped_non_negative(),
            is_configured: false,
            data: serde_json::Value::Null,
        }
    }
}

/// Default canvas position for the `index`-th stage added to a workflow.
///
/// Stages pack row-major into a fixed three-column grid, so the fourth stage
/// (index 3) starts the second row.
pub fn grid_slot_position(index: usize) -> Point {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Point::new(
        GRID_ORIGIN.x + column as f64 * (STAGE_WIDTH + STAGE_GAP),
        GRID_ORIGIN.y + row as f64 * (STAGE_HEIGHT + STAGE_GAP),
    )
}
