//! Prelude module for convenient imports
//!
//! Re-exports the types needed for the common editor loop: build a
//! controller around a workflow, feed it pointer events, render the scene,
//! and save to a library.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowstage::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut controller = EditorController::new(Workflow::new("Denim QA"));
//! let first = controller.add_stage()?;
//! let second = controller.add_stage()?;
//!
//! // Two-click connection gesture: right anchor of the first stage to the
//! // left anchor of the second.
//! controller.click_anchor(&first, AnchorSide::Right)?;
//! controller.click_anchor(&second, AnchorSide::Left)?;
//!
//! let scene = build_scene(controller.workflow(), controller.viewport());
//! println!("{} stages, {} connections", scene.nodes.len(), scene.edges.len());
//!
//! let mut library = WorkflowLibrary::new(MemoryStore::new());
//! controller.save_to(&mut library)?;
//! # Ok(())
//! # }
//! ```

// Controller and interaction state
pub use crate::controller::{
    EditorController, Notice, NoticeLevel, PointerButton, PointerInput, PointerSession,
};

// Graph model
pub use crate::graph::{AnchorSide, Connection, ConnectionKind, StageBlock, Workflow};

// Coordinate spaces and viewport
pub use crate::canvas::{Point, Viewport, to_canvas, to_screen};

// Routing and scene building
pub use crate::routing::{route, route_connection, rounded_svg_path};
pub use crate::scene::{EdgeSprite, NodeSprite, Scene, build_scene};

// Persistence
pub use crate::persistence::{
    FileStore, KeyValueStore, LIBRARY_KEY, MemoryStore, WorkflowLibrary,
};

// Error types
pub use crate::error::{EditError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
