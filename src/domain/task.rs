//! Task aggregate and its persisted form.

use super::{Owner, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item belonging to one owner.
///
/// Tasks are immutable values: the toggling helpers return an updated copy
/// and leave the receiver untouched, so snapshots of the containing state
/// can be compared structurally.
///
/// The serialized form matches the on-device snapshot document: camel-case
/// keys, timestamps as epoch milliseconds, and an omitted `dueDate` when no
/// deadline is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    owner: Owner,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    important: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub text: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted owner.
    pub owner: Owner,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted importance flag.
    pub important: bool,
    /// Persisted deadline, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task for `owner` at the clock's current time.
    ///
    /// The text is trimmed; the task starts incomplete with no deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when `text` is blank after
    /// trimming.
    pub fn new(
        owner: Owner,
        text: &str,
        important: bool,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyText);
        }

        Ok(Self {
            id: TaskId::new(),
            text: trimmed.to_owned(),
            completed: false,
            owner,
            created_at: clock.utc(),
            important,
            due_date: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            completed: data.completed,
            owner: data.owner,
            created_at: data.created_at,
            important: data.important,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the user-visible task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the owner the task belongs to.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is flagged for reminder surfacing.
    #[must_use]
    pub const fn important(&self) -> bool {
        self.important
    }

    /// Returns the deadline, or `None` when the task has no deadline.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn with_completion_toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy with the importance flag flipped.
    #[must_use]
    pub fn with_importance_toggled(&self) -> Self {
        Self {
            important: !self.important,
            ..self.clone()
        }
    }

    /// Returns a copy with the deadline set or cleared.
    #[must_use]
    pub fn with_due_date(&self, due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            due_date,
            ..self.clone()
        }
    }
}
