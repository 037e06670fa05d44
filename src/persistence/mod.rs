//! Workflow persistence: a JSON library of workflow records behind a
//! pluggable key-value store.
//!
//! The whole library lives under one fixed key as a JSON array of workflow
//! records. Saving upserts by workflow id; loading reads the full array,
//! optionally filtered by id. The concrete backend (in-memory map, files on
//! disk, a remote API) is an implementation detail behind the
//! [`KeyValueStore`] trait.

pub mod library;
pub mod store;

pub use library::{LIBRARY_KEY, WorkflowLibrary};
pub use store::{FileStore, KeyValueStore, MemoryStore};
