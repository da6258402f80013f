//! Shared helpers for unit tests.

use crate::domain::{Owner, PersistedTaskData, TaskId};
use chrono::{DateTime, TimeZone, Utc};

/// A fixed reference instant far from any clock skew concerns.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
}

/// An incomplete, unimportant, deadline-free persisted task.
pub fn persisted(owner: Owner, text: &str, created_at: DateTime<Utc>) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(),
        text: text.to_owned(),
        completed: false,
        owner,
        created_at,
        important: false,
        due_date: None,
    }
}
