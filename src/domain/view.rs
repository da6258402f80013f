//! Filtered, ordered task views for display.

use super::Task;

/// Returns the tasks to display for one list tab, filtered and ordered.
///
/// Keeps tasks whose completion flag matches `show_completed`. The
/// completed tab orders by creation time, newest first. The active tab
/// puts important tasks first and breaks ties by creation time, newest
/// first.
#[must_use]
pub fn visible_tasks(tasks: &[Task], show_completed: bool) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| task.completed() == show_completed)
        .cloned()
        .collect();

    if show_completed {
        visible.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    } else {
        visible.sort_by(|a, b| {
            b.important()
                .cmp(&a.important())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
    }

    visible
}

/// Returns the fixed message shown when a tab has no tasks to display.
#[must_use]
pub const fn empty_state_message(show_completed: bool) -> &'static str {
    if show_completed {
        "Nenhuma tarefa concluída"
    } else {
        "Nenhuma tarefa adicionada"
    }
}

/// Completion progress for one owner's panel header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    /// Number of completed tasks.
    pub completed: usize,
    /// Total number of tasks.
    pub total: usize,
}

impl CompletionSummary {
    /// Counts completed and total tasks in one owner's sequence.
    #[must_use]
    pub fn for_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.completed()).count(),
            total: tasks.len(),
        }
    }

    /// Renders the progress badge text for the panel header.
    #[must_use]
    pub fn label(&self) -> String {
        if self.total == 0 {
            "Sem tarefas".to_owned()
        } else if self.completed == self.total {
            "Tudo concluído!".to_owned()
        } else {
            format!("{}/{} concluídas", self.completed, self.total)
        }
    }
}
