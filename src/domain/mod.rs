//! Domain model for the shared two-person task list.
//!
//! The domain owns the task shape, the per-owner task container with its
//! pure snapshot operations, and the filtered/sorted views handed to the
//! display layer. Every operation is a deterministic transformation that
//! returns a new snapshot; infrastructure concerns stay outside this
//! boundary.

mod error;
mod ids;
mod owner;
mod state;
mod task;
mod view;

pub use error::{ParseOwnerError, TaskDomainError};
pub use ids::TaskId;
pub use owner::Owner;
pub use state::TasksState;
pub use task::{PersistedTaskData, Task};
pub use view::{CompletionSummary, empty_state_message, visible_tasks};
