//! The workflow graph data model.
//!
//! A [`Workflow`] aggregates [`StageBlock`] nodes and the directed
//! [`Connection`] edges between them. The model is pure data: it knows nothing
//! about pointers, viewports, or rendering, and it never enforces the locked
//! flag itself. Policy checks (lock enforcement, gesture validation) live in
//! the [`controller`](crate::controller); the model only guarantees its own
//! structural invariants: no self-loop connections, no connections to missing
//! blocks, and non-negative stage positions.

pub mod block;
pub mod connection;
pub mod workflow;

pub use block::{
    AnchorSide, GRID_COLUMNS, GRID_ORIGIN, STAGE_GAP, STAGE_HEIGHT, STAGE_WIDTH, StageBlock,
    grid_slot_position,
};
pub use connection::{Connection, ConnectionKind};
pub use workflow::Workflow;
