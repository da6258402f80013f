//! In-memory task store for tests and storage-free embedding.

use crate::domain::TasksState;
use crate::ports::{TaskChange, TaskStore, TaskStoreError, TaskStoreResult, WriteFailurePolicy};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// a session and inspect persisted snapshots through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<TasksState>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `state`.
    #[must_use]
    pub fn with_state(state: TasksState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns a copy of the currently stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the state lock is poisoned.
    pub fn snapshot(&self) -> TaskStoreResult<TasksState> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> TaskStoreResult<TasksState> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    async fn persist(&self, snapshot: &TasksState, _change: &TaskChange) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = snapshot.clone();
        Ok(())
    }

    fn write_failure_policy(&self) -> WriteFailurePolicy {
        WriteFailurePolicy::LogOnly
    }
}
