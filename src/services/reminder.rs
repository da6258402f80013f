//! Reminder scanning and scheduling.
//!
//! The scan itself is pure logic: given a snapshot and an instant it
//! classifies outstanding tasks, and the caller decides what to do with
//! the result. The scheduler is the only timed part, a cancellable
//! interval task that does nothing but deliver ticks.

use crate::domain::{Task, TasksState};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// How long after its deadline a task still counts as freshly overdue.
///
/// Overdue toasts fire only for tasks inside this window at the moment the
/// task set changes; a task that crossed its deadline earlier is considered
/// already seen and stays silent.
pub const FRESHLY_OVERDUE_WINDOW_MS: i64 = 60_000;

/// Classification of outstanding tasks at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderScan {
    /// Incomplete tasks flagged important.
    pub important: Vec<Task>,
    /// Incomplete tasks whose deadline has passed.
    pub overdue: Vec<Task>,
    /// Overdue tasks still inside the freshly-overdue window.
    pub freshly_overdue: Vec<Task>,
}

impl ReminderScan {
    /// Scans the full task set at instant `now`.
    ///
    /// Completed tasks never appear in any bucket; a task with no deadline
    /// is never overdue.
    #[must_use]
    pub fn compute(state: &TasksState, now: DateTime<Utc>) -> Self {
        let mut scan = Self::default();
        for task in state.all_tasks() {
            if task.completed() {
                continue;
            }
            if task.important() {
                scan.important.push(task.clone());
            }
            let Some(due) = task.due_date() else {
                continue;
            };
            if due < now {
                scan.overdue.push(task.clone());
                if now.signed_duration_since(due).num_milliseconds() < FRESHLY_OVERDUE_WINDOW_MS {
                    scan.freshly_overdue.push(task.clone());
                }
            }
        }
        scan
    }
}

/// At most one blocking reminder prompt, shown until resolved.
#[derive(Debug, Clone, Default)]
pub struct ReminderPrompt {
    current: Option<Task>,
}

impl ReminderPrompt {
    /// Returns whether a prompt is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the task named by the current prompt, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Task> {
        self.current.as_ref()
    }

    /// Shows a prompt for `task`, replacing any previous one.
    pub fn show(&mut self, task: Task) {
        self.current = Some(task);
    }

    /// Hides the prompt and returns the task it named.
    pub fn take(&mut self) -> Option<Task> {
        self.current.take()
    }

    /// Hides the prompt without resolving it.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// Message delivered on every reminder interval tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTick;

/// Cancellable periodic tick source for the importance reminder.
///
/// The spawned task sends a [`ReminderTick`] every `period`, starting one
/// full period after spawn. Dropping the scheduler aborts the task, so a
/// torn-down session never leaves a dangling timer behind.
#[derive(Debug)]
pub struct ReminderScheduler {
    handle: JoinHandle<()>,
}

impl ReminderScheduler {
    /// Spawns the interval task on the current tokio runtime.
    ///
    /// Stops on its own once the receiving side of `ticks` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn spawn(period: Duration, ticks: mpsc::UnboundedSender<ReminderTick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick of a tokio interval fires immediately
            timer.tick().await;
            loop {
                timer.tick().await;
                if ticks.send(ReminderTick).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(period_secs = period.as_secs(), "reminder scheduler started");
        Self { handle }
    }

    /// Stops the interval task.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
