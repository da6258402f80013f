//! Local single-file JSON snapshot store.
//!
//! The whole task state is one JSON document under a fixed file name in a
//! caller-supplied directory, mirroring the on-device storage key the
//! product has always used. Writes go through a temporary file and a
//! rename so a crash mid-write never leaves a truncated snapshot behind.

use crate::domain::TasksState;
use crate::ports::{TaskChange, TaskStore, TaskStoreError, TaskStoreResult, WriteFailurePolicy};
use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

/// Fixed snapshot file name inside the data directory.
pub const SNAPSHOT_FILE: &str = "couple-tasks.json";

const SNAPSHOT_TMP_FILE: &str = "couple-tasks.json.tmp";

/// Snapshot-mode task store backed by one JSON file.
#[derive(Debug)]
pub struct LocalSnapshotStore {
    dir: Dir,
}

impl LocalSnapshotStore {
    /// Opens a store rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the directory cannot be opened.
    pub fn open(data_dir: &str) -> TaskStoreResult<Self> {
        let dir = Dir::open_ambient_dir(data_dir, cap_std::ambient_authority())
            .map_err(TaskStoreError::persistence)?;
        tracing::debug!(data_dir, snapshot = SNAPSHOT_FILE, "opened snapshot store");
        Ok(Self { dir })
    }

    /// Creates a store over an already-opened capability handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn read_snapshot(&self) -> TaskStoreResult<TasksState> {
        let raw = match self.dir.read_to_string(SNAPSHOT_FILE) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TasksState::default()),
            Err(err) => return Err(TaskStoreError::persistence(err)),
        };
        let parsed: TasksState = serde_json::from_str(&raw).map_err(TaskStoreError::corrupt)?;
        Ok(parsed.repartitioned())
    }

    fn write_snapshot(&self, snapshot: &TasksState) -> TaskStoreResult<()> {
        let encoded = serde_json::to_string(snapshot).map_err(TaskStoreError::persistence)?;
        self.dir
            .write(SNAPSHOT_TMP_FILE, encoded)
            .map_err(TaskStoreError::persistence)?;
        self.dir
            .rename(SNAPSHOT_TMP_FILE, &self.dir, SNAPSHOT_FILE)
            .map_err(TaskStoreError::persistence)
    }
}

#[async_trait]
impl TaskStore for LocalSnapshotStore {
    async fn load(&self) -> TaskStoreResult<TasksState> {
        self.read_snapshot()
    }

    async fn persist(&self, snapshot: &TasksState, _change: &TaskChange) -> TaskStoreResult<()> {
        self.write_snapshot(snapshot)
    }

    fn write_failure_policy(&self) -> WriteFailurePolicy {
        WriteFailurePolicy::LogOnly
    }
}
