//! `PostgreSQL` row store for shared task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskStore, TaskPgPool};

pub(crate) use models::{NewTaskRow, TaskRow};
pub(crate) use repository::{row_to_task, to_new_row};
