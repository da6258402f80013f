//! Storage port for the task set.
//!
//! One contract covers both persistence styles: snapshot stores write the
//! whole state as a single document, row stores translate each mutation
//! into one row-level call. `persist` therefore receives both the full new
//! snapshot and the delta that produced it, and each adapter uses the part
//! it needs. Callers never branch on the backend.

use crate::domain::{Task, TaskId, TasksState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the last persisted task state.
    ///
    /// A successful load always satisfies the [`TasksState`] invariants:
    /// both owner sequences are present, possibly empty. A store with
    /// nothing persisted yet returns the empty state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the underlying read fails or the
    /// persisted data cannot be decoded. Callers are expected to degrade a
    /// failed load to the empty state rather than propagate it.
    async fn load(&self) -> TaskStoreResult<TasksState>;

    /// Persists a mutation.
    ///
    /// `snapshot` is the complete state after the mutation; `change` is the
    /// delta that produced it. Snapshot stores write `snapshot` and ignore
    /// `change`; row stores apply `change` and ignore `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the write fails. The caller decides
    /// how to surface the failure based on [`Self::write_failure_policy`];
    /// the optimistic in-memory state is never rolled back.
    async fn persist(&self, snapshot: &TasksState, change: &TaskChange) -> TaskStoreResult<()>;

    /// How the caller should treat a failed `persist` call.
    fn write_failure_policy(&self) -> WriteFailurePolicy;
}

/// A single mutation of the task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    /// A task was appended to its owner's sequence.
    Created(Task),
    /// One field of an existing task changed.
    Updated {
        /// Identifier of the changed task.
        id: TaskId,
        /// The field that changed and its new value.
        field: TaskFieldUpdate,
    },
    /// A task was removed.
    Removed(TaskId),
}

/// The single field changed by an update, with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFieldUpdate {
    /// New completion flag.
    Completed(bool),
    /// New importance flag.
    Important(bool),
    /// New deadline; `None` clears it.
    DueDate(Option<DateTime<Utc>>),
}

/// How a failed write should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFailurePolicy {
    /// Best-effort persistence: log the failure and carry on.
    LogOnly,
    /// Report the failure to the user as an error notice.
    Surface,
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The persisted task data could not be decoded.
    #[error("corrupt task snapshot: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a decode error.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
