//! The task session: canonical state, mutations, and notices.
//!
//! The session is the single logical writer for the running app. Mutations
//! apply the pure snapshot operations, commit the result optimistically,
//! persist through the configured store, and emit [`Notice`] values the
//! display layer renders as toasts and dialogs. The embedder drives one
//! event loop: user actions call the mutation methods, and ticks received
//! from [`ReminderScheduler`] are fed to [`TaskSession::handle_reminder_tick`].

use crate::domain::{
    CompletionSummary, Owner, Task, TaskId, TasksState, visible_tasks,
};
use crate::ports::{TaskChange, TaskFieldUpdate, TaskStore, WriteFailurePolicy};
use crate::services::reminder::{ReminderPrompt, ReminderScan, ReminderScheduler, ReminderTick};
use chrono::{DateTime, Utc};
use mockable::Clock;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// User-facing event emitted by the session.
///
/// The display layer owns presentation: toast wording, dialog markup, and
/// dismissal timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A task was added to `owner`'s list.
    TaskAdded {
        /// Owner the task was added for.
        owner: Owner,
    },
    /// A task was removed.
    TaskRemoved,
    /// A task crossed its deadline just now; shown as an auto-dismissing
    /// toast.
    TaskOverdue {
        /// The overdue task.
        task: Task,
    },
    /// The periodic importance reminder picked a task; shown as a blocking
    /// prompt until completed or dismissed.
    ReminderRaised {
        /// The task to remind about.
        task: Task,
    },
    /// A write to the backing store failed; the on-screen state is kept.
    StoreWriteFailed {
        /// Human-readable failure description.
        detail: String,
    },
}

/// Holds the canonical task state for one running session.
pub struct TaskSession<S, C>
where
    S: TaskStore + ?Sized,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    state: TasksState,
    prompt: ReminderPrompt,
    scheduler: Option<ReminderScheduler>,
    notices: mpsc::UnboundedSender<Notice>,
}

impl<S, C> TaskSession<S, C>
where
    S: TaskStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a session over `store`, starting from the empty state.
    ///
    /// Notices are delivered on `notices`; call [`Self::load`] before
    /// serving user actions.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, notices: mpsc::UnboundedSender<Notice>) -> Self {
        Self {
            store,
            clock,
            state: TasksState::default(),
            prompt: ReminderPrompt::default(),
            scheduler: None,
            notices,
        }
    }

    /// Loads the persisted task state.
    ///
    /// A failed read degrades to the empty state with a logged warning; the
    /// session never refuses to start over storage trouble.
    pub async fn load(&mut self) {
        self.state = self.store.load().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load persisted tasks, starting empty");
            TasksState::default()
        });
        self.emit_freshly_overdue();
    }

    /// Returns the current task state.
    #[must_use]
    pub const fn state(&self) -> &TasksState {
        &self.state
    }

    /// Returns the filtered, ordered tasks for one owner's tab.
    #[must_use]
    pub fn visible_tasks(&self, owner: Owner, show_completed: bool) -> Vec<Task> {
        visible_tasks(self.state.owned(owner), show_completed)
    }

    /// Returns the completion progress for one owner's panel header.
    #[must_use]
    pub fn summary(&self, owner: Owner) -> CompletionSummary {
        CompletionSummary::for_tasks(self.state.owned(owner))
    }

    /// Returns the task named by the visible reminder prompt, if any.
    #[must_use]
    pub const fn reminder(&self) -> Option<&Task> {
        self.prompt.current()
    }

    /// Adds a task to `owner`'s list.
    ///
    /// Blank text is silently ignored. Emits [`Notice::TaskAdded`] on
    /// success.
    pub async fn add_task(&mut self, owner: Owner, text: &str, important: bool) {
        let next = self.state.add(owner, text, important, &*self.clock);
        if next.owned(owner).len() == self.state.owned(owner).len() {
            return;
        }
        let Some(task) = next.owned(owner).last().cloned() else {
            return;
        };
        self.apply(next);
        self.send(Notice::TaskAdded { owner });
        self.persist(&TaskChange::Created(task)).await;
    }

    /// Removes a task from `owner`'s list; a stale identifier is a no-op.
    ///
    /// Emits [`Notice::TaskRemoved`] when a task was actually removed.
    pub async fn remove_task(&mut self, owner: Owner, id: TaskId) {
        if self.state.find(owner, id).is_none() {
            return;
        }
        let next = self.state.remove(owner, id);
        self.apply(next);
        self.send(Notice::TaskRemoved);
        self.persist(&TaskChange::Removed(id)).await;
    }

    /// Flips the completion flag on a task; a stale identifier is a no-op.
    pub async fn toggle_completion(&mut self, owner: Owner, id: TaskId) {
        let next = self.state.toggle_completion(owner, id);
        let Some(completed) = next.find(owner, id).map(Task::completed) else {
            return;
        };
        let change = TaskChange::Updated {
            id,
            field: TaskFieldUpdate::Completed(completed),
        };
        self.apply(next);
        self.persist(&change).await;
    }

    /// Flips the importance flag on a task; a stale identifier is a no-op.
    pub async fn toggle_importance(&mut self, owner: Owner, id: TaskId) {
        let next = self.state.toggle_importance(owner, id);
        let Some(important) = next.find(owner, id).map(Task::important) else {
            return;
        };
        let change = TaskChange::Updated {
            id,
            field: TaskFieldUpdate::Important(important),
        };
        self.apply(next);
        self.persist(&change).await;
    }

    /// Sets or clears a task's deadline; a stale identifier is a no-op.
    pub async fn set_due_date(
        &mut self,
        owner: Owner,
        id: TaskId,
        due_date: Option<DateTime<Utc>>,
    ) {
        if self.state.find(owner, id).is_none() {
            return;
        }
        let next = self.state.set_due_date(owner, id, due_date);
        let change = TaskChange::Updated {
            id,
            field: TaskFieldUpdate::DueDate(due_date),
        };
        self.apply(next);
        self.persist(&change).await;
    }

    /// Starts the periodic importance reminder.
    ///
    /// Returns the tick stream the embedder's event loop feeds back into
    /// [`Self::handle_reminder_tick`]. A previous scheduler, if any, is
    /// stopped first.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start_reminders(&mut self, period: Duration) -> mpsc::UnboundedReceiver<ReminderTick> {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        self.scheduler = Some(ReminderScheduler::spawn(period, tick_tx));
        tick_rx
    }

    /// Stops the reminder scheduler, if running.
    pub fn shutdown(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.shutdown();
        }
    }

    /// Handles one reminder interval tick.
    ///
    /// If no prompt is currently visible and at least one incomplete
    /// important task exists, picks one uniformly at random and raises the
    /// prompt via [`Notice::ReminderRaised`]. The same task may be picked
    /// again on a later tick while it stays incomplete and important.
    pub fn handle_reminder_tick(&mut self) {
        if self.prompt.is_visible() {
            return;
        }
        let scan = ReminderScan::compute(&self.state, self.clock.utc());
        let mut rng = rand::thread_rng();
        let Some(task) = scan.important.choose(&mut rng).cloned() else {
            return;
        };
        self.prompt.show(task.clone());
        self.send(Notice::ReminderRaised { task });
    }

    /// Resolves the visible reminder prompt by completing its task.
    pub async fn complete_reminder(&mut self) {
        let Some(task) = self.prompt.take() else {
            return;
        };
        self.toggle_completion(task.owner(), task.id()).await;
    }

    /// Resolves the visible reminder prompt without touching the task.
    pub fn dismiss_reminder(&mut self) {
        self.prompt.dismiss();
    }

    /// Commits the new snapshot optimistically and rescans it.
    fn apply(&mut self, next: TasksState) {
        self.state = next;
        self.emit_freshly_overdue();
    }

    /// Emits one overdue toast per task inside the freshly-overdue window.
    ///
    /// Runs only when the task set changes, so a task that crossed its
    /// deadline while the set sat untouched for longer than the window
    /// never toasts.
    fn emit_freshly_overdue(&self) {
        let scan = ReminderScan::compute(&self.state, self.clock.utc());
        for task in scan.freshly_overdue {
            self.send(Notice::TaskOverdue { task });
        }
    }

    async fn persist(&self, change: &TaskChange) {
        let Err(err) = self.store.persist(&self.state, change).await else {
            return;
        };
        match self.store.write_failure_policy() {
            WriteFailurePolicy::LogOnly => {
                tracing::warn!(error = %err, "task persistence failed, keeping optimistic state");
            }
            WriteFailurePolicy::Surface => {
                tracing::warn!(error = %err, "task persistence failed, surfacing to display");
                self.send(Notice::StoreWriteFailed {
                    detail: err.to_string(),
                });
            }
        }
    }

    fn send(&self, notice: Notice) {
        if self.notices.send(notice).is_err() {
            tracing::debug!("notice channel closed, display layer detached");
        }
    }
}
