//! # Flowstage - Interactive Workflow Graph Editor Core
//!
//! **Flowstage** is the engine behind a workflow canvas: users place stage
//! cards, drag them around, pan and zoom the viewport, and draw directional
//! connections between stages that are routed as orthogonal (Manhattan-style)
//! polylines. This crate contains the data model, the pointer-interaction
//! state machine, the coordinate-space transforms, and the path router; it
//! deliberately contains no rendering, so every behavior is testable without
//! a UI harness.
//!
//! ## Architecture
//!
//! Three layers, strictly separated:
//!
//! 1. **Model** ([`graph`]) - [`Workflow`](graph::Workflow) aggregates
//!    [`StageBlock`](graph::StageBlock) nodes and
//!    [`Connection`](graph::Connection) edges. Pure data, no UI concerns.
//! 2. **Controller** ([`controller`]) - an
//!    [`EditorController`](controller::EditorController) owns the workflow,
//!    the [`Viewport`](canvas::Viewport), and the pointer session state
//!    machine (idle / dragging / panning / connecting). It is the single
//!    mutation path into the model and enforces the locked-workflow policy.
//! 3. **View contract** ([`scene`]) - [`build_scene`](scene::build_scene) is
//!    a pure function of model + viewport that yields node sprites and routed
//!    edge paths ready for drawing.
//!
//! Pointer events flow from the embedding view into the controller, which
//! converts them to canvas space ([`canvas`]), mutates the model, and lets
//! the view rebuild the scene using the router ([`routing`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowstage::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A fresh workflow with three grid-packed stages.
//!     let mut controller = EditorController::new(Workflow::new("Denim production"));
//!     let cutting = controller.add_stage()?;
//!     let sewing = controller.add_stage()?;
//!     let washing = controller.add_stage()?;
//!
//!     // Connect cutting -> sewing with the two-click anchor gesture.
//!     controller.click_anchor(&cutting, AnchorSide::Right)?;
//!     controller.click_anchor(&sewing, AnchorSide::Left)?;
//!
//!     // Conditional branch sewing -> washing.
//!     controller.set_connection_kind(ConnectionKind::Conditional);
//!     controller.click_anchor(&sewing, AnchorSide::Bottom)?;
//!     controller.click_anchor(&washing, AnchorSide::Top)?;
//!
//!     // Drag the washing stage: press its handle, move, release.
//!     controller.press_block_handle(&washing, Point::new(420.0, 310.0))?;
//!     controller.pointer_move(Point::new(500.0, 360.0));
//!     controller.pointer_up();
//!
//!     // Render-ready scene: canvas-space sprites plus routed edge paths.
//!     let scene = build_scene(controller.workflow(), controller.viewport());
//!     for edge in &scene.edges {
//!         println!("edge {} -> {}", edge.connection_id, edge.svg_path);
//!     }
//!
//!     // Persist explicitly into the shared library.
//!     let mut library = WorkflowLibrary::new(FileStore::open("./library")?);
//!     controller.save_to(&mut library)?;
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod controller;
pub mod error;
pub mod graph;
pub mod persistence;
pub mod prelude;
pub mod routing;
pub mod scene;
