use crate::canvas::Point;
use crate::graph::AnchorSide;

/// Which pointer button a press event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// A pointer press as delivered by the embedding view layer.
///
/// `position` is screen-space, relative to the canvas element's bounding box.
/// `modifier_held` is true when the platform's pan modifier (space or ctrl,
/// the view decides) is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Point,
    pub button: PointerButton,
    pub modifier_held: bool,
}

impl PointerInput {
    pub fn left(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Left,
            modifier_held: false,
        }
    }

    pub fn middle(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Middle,
            modifier_held: false,
        }
    }

    /// True when this press should start a canvas pan: middle button, or left
    /// button with the pan modifier held.
    pub fn starts_pan(&self) -> bool {
        self.button == PointerButton::Middle
            || (self.button == PointerButton::Left && self.modifier_held)
    }
}

/// The controller's pointer-session state machine.
///
/// At most one session is active at a time. Dragging and panning are
/// move-driven and end on pointer release; the connection gesture is
/// click-driven and survives releases until a second anchor click or a click
/// on empty canvas resolves it.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSession {
    /// No drag, no pan, no pending connection.
    Idle,
    /// A single block follows the pointer. `grab_offset` is the canvas-space
    /// distance from the block's top-left corner to where the pointer grabbed
    /// it, so the block does not jump to the cursor on the first move.
    DraggingNode { block_id: String, grab_offset: Point },
    /// The whole canvas follows the pointer. `last_screen` is where the
    /// previous move event left off; each move accumulates the delta into the
    /// viewport's pan offset.
    Panning { last_screen: Point },
    /// A connection gesture is pending from the given anchor, waiting for a
    /// second anchor click.
    ConnectingFrom { block_id: String, side: AnchorSide },
}

impl PointerSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, PointerSession::Idle)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, PointerSession::ConnectingFrom { .. })
    }
}
