//! The canonical per-owner task container and its snapshot operations.

use super::{Owner, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The complete task set, one ordered sequence per owner.
///
/// Every task in the `matheus` sequence belongs to [`Owner::Matheus`] and
/// symmetrically for `ana`; task identifiers are unique across the whole
/// state. All mutation operations return a new snapshot and never touch the
/// receiver, which makes change detection and persistence triggers a value
/// comparison.
///
/// An unmatched task identifier is a benign no-op for every operation, not
/// an error: the display layer only ever passes identifiers it obtained
/// from the current snapshot, and a stale one simply has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksState {
    matheus: Vec<Task>,
    ana: Vec<Task>,
}

impl TasksState {
    /// Builds a state by partitioning tasks into the owner sequences.
    ///
    /// Sequence order follows iteration order within each owner.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut state = Self::default();
        for task in tasks {
            match task.owner() {
                Owner::Matheus => state.matheus.push(task),
                Owner::Ana => state.ana.push(task),
            }
        }
        state
    }

    /// Re-partitions every task under its own owner's key.
    ///
    /// Snapshots read from untrusted storage may place a task under the
    /// wrong owner key; this restores the owner-to-sequence invariant.
    #[must_use]
    pub fn repartitioned(self) -> Self {
        let Self { matheus, ana } = self;
        Self::from_tasks(matheus.into_iter().chain(ana))
    }

    /// Returns the ordered task sequence for one owner.
    #[must_use]
    pub fn owned(&self, owner: Owner) -> &[Task] {
        match owner {
            Owner::Matheus => &self.matheus,
            Owner::Ana => &self.ana,
        }
    }

    /// Iterates over every task in the state, both owners.
    #[must_use]
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.matheus.iter().chain(self.ana.iter())
    }

    /// Returns the total number of tasks across both owners.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.matheus.len() + self.ana.len()
    }

    /// Returns whether neither owner has any tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matheus.is_empty() && self.ana.is_empty()
    }

    /// Finds a task in `owner`'s sequence by identifier.
    #[must_use]
    pub fn find(&self, owner: Owner, id: TaskId) -> Option<&Task> {
        self.owned(owner).iter().find(|task| task.id() == id)
    }

    /// Appends a new task to `owner`'s sequence.
    ///
    /// Blank text (empty after trimming) leaves the state unchanged.
    #[must_use]
    pub fn add(&self, owner: Owner, text: &str, important: bool, clock: &impl Clock) -> Self {
        let Ok(task) = Task::new(owner, text, important, clock) else {
            return self.clone();
        };
        let mut sequence = self.owned(owner).to_vec();
        sequence.push(task);
        self.with_owner_sequence(owner, sequence)
    }

    /// Removes the matching task from `owner`'s sequence.
    #[must_use]
    pub fn remove(&self, owner: Owner, id: TaskId) -> Self {
        let sequence = self
            .owned(owner)
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        self.with_owner_sequence(owner, sequence)
    }

    /// Flips the completion flag on the matching task.
    #[must_use]
    pub fn toggle_completion(&self, owner: Owner, id: TaskId) -> Self {
        self.map_task(owner, id, Task::with_completion_toggled)
    }

    /// Flips the importance flag on the matching task.
    #[must_use]
    pub fn toggle_importance(&self, owner: Owner, id: TaskId) -> Self {
        self.map_task(owner, id, Task::with_importance_toggled)
    }

    /// Sets or clears the deadline on the matching task.
    #[must_use]
    pub fn set_due_date(&self, owner: Owner, id: TaskId, due_date: Option<DateTime<Utc>>) -> Self {
        self.map_task(owner, id, |task| task.with_due_date(due_date))
    }

    /// Replaces the matching task with `update(task)`, keeping every other
    /// task structurally unchanged.
    fn map_task(&self, owner: Owner, id: TaskId, update: impl Fn(&Task) -> Task) -> Self {
        let sequence = self
            .owned(owner)
            .iter()
            .map(|task| {
                if task.id() == id {
                    update(task)
                } else {
                    task.clone()
                }
            })
            .collect();
        self.with_owner_sequence(owner, sequence)
    }

    fn with_owner_sequence(&self, owner: Owner, sequence: Vec<Task>) -> Self {
        match owner {
            Owner::Matheus => Self {
                matheus: sequence,
                ana: self.ana.clone(),
            },
            Owner::Ana => Self {
                matheus: self.matheus.clone(),
                ana: sequence,
            },
        }
    }
}
