//! Shared helpers for in-memory session tests.

use std::sync::Arc;

use mockable::DefaultClock;
use tandem::adapters::memory::InMemoryTaskStore;
use tandem::domain::{Owner, TasksState};
use tandem::services::{Notice, TaskSession};
use tokio::sync::mpsc;

/// Session type used across the in-memory suites.
pub type MemorySession = TaskSession<InMemoryTaskStore, DefaultClock>;

/// Builds a session over `store`, returning the notice stream with it.
pub fn session_over(store: &InMemoryTaskStore) -> (MemorySession, mpsc::UnboundedReceiver<Notice>) {
    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let session = TaskSession::new(Arc::new(store.clone()), Arc::new(DefaultClock), notice_tx);
    (session, notice_rx)
}

/// Asserts exactly one task with `text` exists in `owner`'s sequence.
///
/// # Errors
///
/// Returns an error if the sequence does not contain exactly one task with
/// the expected text.
pub fn assert_single_task(
    state: &TasksState,
    owner: Owner,
    text: &str,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        state.owned(owner).len() == 1,
        "expected exactly one task, found {}",
        state.owned(owner).len()
    );
    let task = state
        .owned(owner)
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(
        task.text() == text,
        "task text mismatch: expected {text}, found {}",
        task.text()
    );
    Ok(())
}
