use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::graph::Workflow;

/// Fixed namespace key under which the workflow library is stored.
pub const LIBRARY_KEY: &str = "workflow-library";

/// The saved collection of workflows, stored as one JSON array of records.
pub struct WorkflowLibrary<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WorkflowLibrary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Upserts a workflow into the library by id, replacing any existing
    /// record, and refreshes the workflow's `updated_at`.
    pub fn save(&mut self, workflow: &mut Workflow) -> Result<(), StoreError> {
        workflow.touch();
        let mut records = self.read_records()?;
        match records.iter_mut().find(|w| w.id == workflow.id) {
            Some(existing) => *existing = workflow.clone(),
            None => records.push(workflow.clone()),
        }
        let json = serde_json::to_string(&records).map_err(|e| StoreError::MalformedLibrary {
            key: LIBRARY_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.write(LIBRARY_KEY, &json)
    }

    /// Loads every workflow in the library. Connections referencing a block
    /// that no longer exists are dropped from each record so one stale entry
    /// cannot make the editor unusable.
    pub fn load_all(&self) -> Result<Vec<Workflow>, StoreError> {
        let mut records = self.read_records()?;
        for workflow in &mut records {
            workflow.prune_dangling_connections();
        }
        Ok(records)
    }

    /// Loads a single workflow by id. Supports the "open workflow from a query
    /// parameter" flow in the dashboard.
    pub fn load(&self, workflow_id: &str) -> Result<Workflow, StoreError> {
        self.load_all()?
            .into_iter()
            .find(|w| w.id == workflow_id)
            .ok_or_else(|| StoreError::WorkflowNotFound {
                workflow_id: workflow_id.to_string(),
            })
    }

    fn read_records(&self) -> Result<Vec<Workflow>, StoreError> {
        match self.store.read(LIBRARY_KEY)? {
            None => Ok(Vec::new()),
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| StoreError::MalformedLibrary {
                    key: LIBRARY_KEY.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}
