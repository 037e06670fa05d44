use super::block::{AnchorSide, StageBlock, grid_slot_position};
use super::connection::{Connection, ConnectionKind};
use crate::canvas::Point;
use ahash::AHashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named workflow graph: the persistence unit of the editor.
///
/// Block and connection order is irrelevant; they are stored as vectors only
/// because that is the wire shape. The `is_locked` flag is carried here but
/// enforced by the controller, which rejects mutating operations before they
/// reach the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub blocks: Vec<StageBlock>,
    pub connections: Vec<Connection>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    /// Creates an empty, unlocked workflow with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            blocks: Vec::new(),
            connections: Vec::new(),
            is_locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn block(&self, block_id: &str) -> Option<&StageBlock> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    fn block_mut(&mut self, block_id: &str) -> Option<&mut StageBlock> {
        self.blocks.iter_mut().find(|b| b.id == block_id)
    }

    pub fn contains_block(&self, block_id: &str) -> bool {
        self.block(block_id).is_some()
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    /// Adds a new unconfigured stage at the next free grid slot and returns
    /// its id.
    pub fn add_stage(&mut self) -> String {
        let block = StageBlock::new(grid_slot_position(self.blocks.len()));
        let id = block.id.clone();
        self.blocks.push(block);
        id
    }

    /// Removes a block and every connection touching it. Returns the removed
    /// block, or `None` if the id is unknown.
    pub fn remove_block(&mut self, block_id: &str) -> Option<StageBlock> {
        let index = self.blocks.iter().position(|b| b.id == block_id)?;
        let block = self.blocks.remove(index);
        // Cascade: a connection may not outlive either endpoint.
        self.connections.retain(|c| !c.touches(block_id));
        Some(block)
    }

    /// Creates a connection between two anchors. Returns `None` without
    /// mutating anything when the endpoints are the same block or either id is
    /// unknown.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        from_node: AnchorSide,
        to_node: AnchorSide,
        kind: ConnectionKind,
    ) -> Option<&Connection> {
        if from == to || !self.contains_block(from) || !self.contains_block(to) {
            return None;
        }
        self.connections
            .push(Connection::link(from, to, from_node, to_node, kind));
        self.connections.last()
    }

    /// Removes a connection by id.
    pub fn remove_connection(&mut self, connection_id: &str) -> Option<Connection> {
        let index = self
            .connections
            .iter()
            .position(|c| c.id == connection_id)?;
        Some(self.connections.remove(index))
    }

    /// Moves a block to a new canvas position, clamping both axes to zero or
    /// above. Returns `false` if the id is unknown.
    pub fn move_block(&mut self, block_id: &str, position: Point) -> bool {
        match self.block_mut(block_id) {
            Some(block) => {
                block.position = position.clamped_non_negative();
                true
            }
            None => false,
        }
    }

    /// Stores the wizard's payload on a block and marks it configured.
    pub fn complete_configuration(&mut self, block_id: &str, data: serde_json::Value) -> bool {
        match self.block_mut(block_id) {
            Some(block) => {
                block.data = data;
                block.is_configured = true;
                true
            }
            None => false,
        }
    }

    /// Drops connections whose endpoints no longer exist and returns how many
    /// were removed. Persisted libraries may contain such edges (for example
    /// after a partial external edit); loading runs this so a stale record
    /// degrades gracefully instead of failing.
    pub fn prune_dangling_connections(&mut self) -> usize {
        let ids: AHashSet<&str> = self.blocks.iter().map(|b| b.id.as_str()).collect();
        let before = self.connections.len();
        self.connections
            .retain(|c| ids.contains(c.from.as_str()) && ids.contains(c.to.as_str()));
        before - self.connections.len()
    }

    /// Refreshes `updated_at`. Called by the library on every save.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
