//! Diesel row models for shared task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// User-visible task text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Owner name.
    pub owner: String,
    /// Importance flag; `NULL` reads as not important.
    pub important: Option<bool>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// User-visible task text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Owner name.
    pub owner: String,
    /// Importance flag, always written explicitly.
    pub important: Option<bool>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
