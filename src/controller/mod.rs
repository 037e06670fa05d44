//! The pointer-interaction state machine and the single mutation path into
//! the graph model.
//!
//! An [`EditorController`] owns the [`Workflow`] being edited, the transient
//! [`Viewport`], and the current [`PointerSession`]. The embedding view layer
//! translates raw pointer events into the semantic entry points here
//! (`press_block_handle`, `press_canvas`, `click_anchor`, `pointer_move`,
//! `pointer_up`) and calls the explicit operations (`add_stage`,
//! `delete_stage`, ...) from its buttons and menus. Nothing else mutates the
//! workflow or the viewport.
//!
//! All methods are synchronous and the controller is single-threaded by
//! construction: events must be delivered in arrival order, and a
//! `pointer_up` always finalizes whichever session was active when it fired.
//! Every operation either fully applies or is rejected before any state
//! changes; a locked workflow rejects all mutations up front and queues a
//! user-visible [`Notice`].

pub mod notices;
pub mod session;

pub use notices::{Notice, NoticeLevel};
pub use session::{PointerButton, PointerInput, PointerSession};

use crate::canvas::{Point, Viewport, to_canvas};
use crate::error::{EditError, StoreError};
use crate::graph::{AnchorSide, ConnectionKind, Workflow};
use crate::persistence::{KeyValueStore, WorkflowLibrary};

/// Owns one workflow under edit and every piece of interaction state attached
/// to it.
pub struct EditorController {
    workflow: Workflow,
    viewport: Viewport,
    session: PointerSession,
    /// Screen position of the canvas element's top-left corner, pushed in by
    /// the view whenever its layout changes.
    canvas_origin: Point,
    /// Kind applied to the next completed connection gesture.
    next_connection_kind: ConnectionKind,
    notices: Vec<Notice>,
}

impl EditorController {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            viewport: Viewport::default(),
            session: PointerSession::Idle,
            canvas_origin: Point::ZERO,
            next_connection_kind: ConnectionKind::default(),
            notices: Vec::new(),
        }
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn session(&self) -> &PointerSession {
        &self.session
    }

    /// Hands the workflow back, consuming the controller.
    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }

    /// Takes all queued user-facing notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    /// Chooses the kind stamped onto the next completed connection gesture.
    pub fn set_connection_kind(&mut self, kind: ConnectionKind) {
        self.next_connection_kind = kind;
    }

    // --- Explicit operations (buttons, menus, wizard callbacks) ---

    /// Adds a new unconfigured stage at the next grid slot and returns its id.
    pub fn add_stage(&mut self) -> Result<String, EditError> {
        self.ensure_unlocked()?;
        Ok(self.workflow.add_stage())
    }

    /// Deletes a stage and, by cascade, every connection touching it. A
    /// pending gesture or drag anchored on that stage is cancelled.
    pub fn delete_stage(&mut self, block_id: &str) -> Result<(), EditError> {
        self.ensure_unlocked()?;
        if self.workflow.remove_block(block_id).is_none() {
            return Err(EditError::UnknownBlock {
                block_id: block_id.to_string(),
            });
        }
        let anchored_here = match &self.session {
            PointerSession::DraggingNode { block_id: id, .. } => id == block_id,
            PointerSession::ConnectingFrom { block_id: id, .. } => id == block_id,
            _ => false,
        };
        if anchored_here {
            self.session = PointerSession::Idle;
        }
        Ok(())
    }

    /// Deletes a single connection by id.
    pub fn delete_connection(&mut self, connection_id: &str) -> Result<(), EditError> {
        self.ensure_unlocked()?;
        self.workflow
            .remove_connection(connection_id)
            .map(|_| ())
            .ok_or_else(|| EditError::UnknownConnection {
                connection_id: connection_id.to_string(),
            })
    }

    /// Wizard completion callback: stores the wizard's payload opaquely and
    /// marks the stage configured.
    pub fn complete_configuration(
        &mut self,
        block_id: &str,
        data: serde_json::Value,
    ) -> Result<(), EditError> {
        self.ensure_unlocked()?;
        if self.workflow.complete_configuration(block_id, data) {
            Ok(())
        } else {
            Err(EditError::UnknownBlock {
                block_id: block_id.to_string(),
            })
        }
    }

    /// Locks or unlocks the workflow. Locking cancels any in-flight session so
    /// no further pointer moves can mutate the model.
    pub fn set_locked(&mut self, locked: bool) {
        self.workflow.is_locked = locked;
        if locked {
            self.session = PointerSession::Idle;
        }
    }

    /// Saves the workflow into a library, refreshing its `updated_at`.
    pub fn save_to<S: KeyValueStore>(
        &mut self,
        library: &mut WorkflowLibrary<S>,
    ) -> Result<(), StoreError> {
        library.save(&mut self.workflow)
    }

    // --- Pointer session entry points ---

    /// Pointer-down on a block's drag handle. Starts a node drag, remembering
    /// where inside the block the pointer grabbed it.
    pub fn press_block_handle(&mut self, block_id: &str, screen: Point) -> Result<(), EditError> {
        self.ensure_unlocked()?;
        let block = self
            .workflow
            .block(block_id)
            .ok_or_else(|| EditError::UnknownBlock {
                block_id: block_id.to_string(),
            })?;
        let pointer = to_canvas(screen, self.canvas_origin, self.viewport.zoom());
        self.session = PointerSession::DraggingNode {
            block_id: block_id.to_string(),
            grab_offset: pointer - block.position,
        };
        Ok(())
    }

    /// Pointer-down on empty canvas. Cancels a pending connection gesture;
    /// otherwise starts a pan when the press qualifies (middle button, or left
    /// with the pan modifier).
    pub fn press_canvas(&mut self, input: PointerInput) {
        if self.session.is_connecting() {
            self.session = PointerSession::Idle;
            return;
        }
        if input.starts_pan() {
            self.session = PointerSession::Panning {
                last_screen: input.position,
            };
        }
    }

    /// Click on a connection anchor. The first click arms the gesture; the
    /// second click resolves it:
    ///
    /// - an anchor of a different block creates the connection and returns its
    ///   id,
    /// - an anchor of the same block rejects silently,
    /// - (a press on empty canvas, handled by [`press_canvas`], cancels).
    ///
    /// Either way the session returns to idle after the second click.
    pub fn click_anchor(
        &mut self,
        block_id: &str,
        side: AnchorSide,
    ) -> Result<Option<String>, EditError> {
        self.ensure_unlocked()?;
        if !self.workflow.contains_block(block_id) {
            return Err(EditError::UnknownBlock {
                block_id: block_id.to_string(),
            });
        }
        match self.session.clone() {
            PointerSession::ConnectingFrom {
                block_id: origin,
                side: origin_side,
            } => {
                self.session = PointerSession::Idle;
                if origin == block_id {
                    // Mis-click on the same block: a normal part of the
                    // gesture, not an error.
                    return Ok(None);
                }
                let created = self
                    .workflow
                    .connect(
                        &origin,
                        block_id,
                        origin_side,
                        side,
                        self.next_connection_kind,
                    )
                    .map(|c| c.id.clone());
                Ok(created)
            }
            _ => {
                self.session = PointerSession::ConnectingFrom {
                    block_id: block_id.to_string(),
                    side,
                };
                Ok(None)
            }
        }
    }

    /// Pointer-move dispatch. Drags recompute the block's canvas position
    /// (clamped to non-negative) and commit it live; pans accumulate the
    /// screen-space delta; anything else is a no-op.
    pub fn pointer_move(&mut self, screen: Point) {
        match self.session.clone() {
            PointerSession::DraggingNode {
                block_id,
                grab_offset,
            } => {
                if self.workflow.is_locked {
                    // Lock flipped mid-drag: stop mutating and end the session.
                    self.session = PointerSession::Idle;
                    return;
                }
                let pointer = to_canvas(screen, self.canvas_origin, self.viewport.zoom());
                self.workflow.move_block(&block_id, pointer - grab_offset);
            }
            PointerSession::Panning { last_screen } => {
                self.viewport.pan_by(screen - last_screen);
                self.session = PointerSession::Panning {
                    last_screen: screen,
                };
            }
            _ => {}
        }
    }

    /// Pointer release. Ends a drag or pan; the dragged position and pan
    /// offset were already committed live, so this only clears the session.
    /// A pending connection gesture is click-driven and survives releases.
    pub fn pointer_up(&mut self) {
        if matches!(
            self.session,
            PointerSession::DraggingNode { .. } | PointerSession::Panning { .. }
        ) {
            self.session = PointerSession::Idle;
        }
    }

    // --- Viewport operations ---

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Lock guard run at the top of every mutating operation, before any state
    /// is touched. Queues the user-facing rejection notice.
    fn ensure_unlocked(&mut self) -> Result<(), EditError> {
        if self.workflow.is_locked {
            let name = self.workflow.name.clone();
            self.notices.push(Notice::warning(format!(
                "Workflow '{name}' is locked; unlock it to make changes"
            )));
            return Err(EditError::WorkflowLocked { name });
        }
        Ok(())
    }
}
