//! `PostgreSQL` store implementation for shared task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::domain::{Owner, PersistedTaskData, Task, TaskId, TasksState};
use crate::ports::{
    TaskChange, TaskFieldUpdate, TaskStore, TaskStoreError, TaskStoreResult, WriteFailurePolicy,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Row-mode task store: each mutation becomes one row-level call.
///
/// Fetches order by creation time descending and partition rows by owner
/// into the two sequences. A row whose owner column is unrecognisable is
/// skipped with a warning rather than failing the whole load.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates a store with a fresh pool for `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the pool cannot be created.
    pub fn connect(database_url: &str) -> TaskStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskStoreError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn load(&self) -> TaskStoreResult<TasksState> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(TasksState::from_tasks(
                rows.into_iter().filter_map(row_to_task),
            ))
        })
        .await
    }

    async fn persist(&self, _snapshot: &TasksState, change: &TaskChange) -> TaskStoreResult<()> {
        let applied = change.clone();
        self.run_blocking(move |connection| apply_change(connection, &applied))
            .await
    }

    fn write_failure_policy(&self) -> WriteFailurePolicy {
        WriteFailurePolicy::Surface
    }
}

fn apply_change(connection: &mut PgConnection, change: &TaskChange) -> TaskStoreResult<()> {
    match change {
        TaskChange::Created(task) => {
            diesel::insert_into(tasks::table)
                .values(to_new_row(task))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
        }
        TaskChange::Updated { id, field } => apply_update(connection, *id, *field)?,
        TaskChange::Removed(id) => {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
        }
    }
    Ok(())
}

/// Applies a one-field update; a vanished row is tolerated, matching the
/// last-write-wins semantics of the in-memory state.
fn apply_update(
    connection: &mut PgConnection,
    id: TaskId,
    field: TaskFieldUpdate,
) -> TaskStoreResult<()> {
    let updated = match field {
        TaskFieldUpdate::Completed(completed) => {
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::completed.eq(completed))
                .execute(connection)
        }
        TaskFieldUpdate::Important(important) => {
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::important.eq(Some(important)))
                .execute(connection)
        }
        TaskFieldUpdate::DueDate(due_date) => {
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::due_date.eq(due_date))
                .execute(connection)
        }
    }
    .map_err(TaskStoreError::persistence)?;

    if updated == 0 {
        tracing::debug!(task_id = %id, "task update matched no rows");
    }
    Ok(())
}

pub(crate) fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        text: task.text().to_owned(),
        completed: task.completed(),
        owner: task.owner().as_str().to_owned(),
        important: Some(task.important()),
        due_date: task.due_date(),
        created_at: task.created_at(),
    }
}

pub(crate) fn row_to_task(row: TaskRow) -> Option<Task> {
    let TaskRow {
        id,
        text,
        completed,
        owner: owner_name,
        important,
        due_date,
        created_at,
    } = row;

    let owner = match Owner::try_from(owner_name.as_str()) {
        Ok(owner) => owner,
        Err(err) => {
            tracing::warn!(task_id = %id, error = %err, "skipping task row with unknown owner");
            return None;
        }
    };

    Some(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        text,
        completed,
        owner,
        created_at,
        important: important.unwrap_or(false),
        due_date,
    }))
}
