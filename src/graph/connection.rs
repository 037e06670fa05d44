use super::block::AnchorSide;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a connection. Affects rendering style only; the routing
/// geometry is identical for all kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    #[default]
    Sequential,
    Conditional,
    Parallel,
}

/// A directed edge between two stage blocks, anchored at a specific side of
/// each.
///
/// `from != to` always holds; [`Workflow::connect`](super::Workflow::connect)
/// refuses to build self-loops and the two-click gesture in the controller
/// silently drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    pub from_node: AnchorSide,
    pub to_node: AnchorSide,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
}

impl Connection {
    /// Builds a connection with a fresh unique id. Callers are responsible for
    /// endpoint validation; use [`Workflow::connect`](super::Workflow::connect)
    /// to get it.
    pub(crate) fn link(
        from: &str,
        to: &str,
        from_node: AnchorSide,
        to_node: AnchorSide,
        kind: ConnectionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from: from.to_string(),
            to: to.to_string(),
            from_node,
            to_node,
            kind,
        }
    }

    /// True if either endpoint references the given block.
    pub fn touches(&self, block_id: &str) -> bool {
        self.from == block_id || self.to == block_id
    }
}
