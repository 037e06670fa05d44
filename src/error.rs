use thiserror::Error;

/// Errors produced by editor operations.
///
/// These are policy rejections, not failures: the operation was refused before
/// any state changed, and the editor keeps running. A locked-workflow
/// rejection additionally queues a user-facing notice on the controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Workflow '{name}' is locked and cannot be modified")]
    WorkflowLocked { name: String },

    #[error("Stage block '{block_id}' does not exist in this workflow")]
    UnknownBlock { block_id: String },

    #[error("Connection '{connection_id}' does not exist in this workflow")]
    UnknownConnection { connection_id: String },
}

/// Errors produced by the persistence layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Failed to read key '{key}' from the store: {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write key '{key}' to the store: {message}")]
    WriteFailed { key: String, message: String },

    #[error("Workflow library under key '{key}' is malformed: {message}")]
    MalformedLibrary { key: String, message: String },

    #[error("Workflow '{workflow_id}' was not found in the library")]
    WorkflowNotFound { workflow_id: String },
}
