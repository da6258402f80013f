//! Tests for the filtered, ordered display views.

use crate::domain::{CompletionSummary, Owner, Task, empty_state_message, visible_tasks};
use crate::tests::support::{base_time, persisted};
use chrono::Duration;
use rstest::rstest;

fn task_at(minutes: i64, important: bool, completed: bool) -> Task {
    let mut data = persisted(Owner::Matheus, "Tarefa", base_time() + Duration::minutes(minutes));
    data.important = important;
    data.completed = completed;
    Task::from_persisted(data)
}

#[rstest]
fn active_view_puts_important_tasks_first() {
    let tasks = vec![
        task_at(0, false, false),
        task_at(1, true, false),
        task_at(2, false, false),
    ];

    let visible = visible_tasks(&tasks, false);

    let flags: Vec<bool> = visible.iter().map(Task::important).collect();
    assert_eq!(flags, vec![true, false, false]);
    // the unimportant remainder stays newest-first
    assert!(visible[1].created_at() > visible[2].created_at());
}

#[rstest]
fn active_view_breaks_importance_ties_newest_first() {
    let tasks = vec![
        task_at(0, true, false),
        task_at(5, true, false),
        task_at(3, true, false),
    ];

    let visible = visible_tasks(&tasks, false);

    let offsets: Vec<_> = visible.iter().map(Task::created_at).collect();
    assert_eq!(
        offsets,
        vec![
            base_time() + Duration::minutes(5),
            base_time() + Duration::minutes(3),
            base_time(),
        ]
    );
}

#[rstest]
fn completed_view_ignores_importance() {
    let tasks = vec![
        task_at(0, true, true),
        task_at(5, false, true),
        task_at(3, true, true),
    ];

    let visible = visible_tasks(&tasks, true);

    let offsets: Vec<_> = visible.iter().map(Task::created_at).collect();
    assert_eq!(
        offsets,
        vec![
            base_time() + Duration::minutes(5),
            base_time() + Duration::minutes(3),
            base_time(),
        ]
    );
}

#[rstest]
fn views_filter_on_the_completion_flag() {
    let tasks = vec![
        task_at(0, false, false),
        task_at(1, false, true),
        task_at(2, false, false),
    ];

    assert_eq!(visible_tasks(&tasks, false).len(), 2);
    assert_eq!(visible_tasks(&tasks, true).len(), 1);
}

#[rstest]
fn empty_state_messages_are_distinct() {
    assert_eq!(empty_state_message(false), "Nenhuma tarefa adicionada");
    assert_eq!(empty_state_message(true), "Nenhuma tarefa concluída");
}

#[rstest]
#[case(&[], "Sem tarefas")]
#[case(&[true, true], "Tudo concluído!")]
#[case(&[true, false], "1/2 concluídas")]
fn summary_labels_track_progress(#[case] completions: &[bool], #[case] expected: &str) {
    let tasks: Vec<Task> = completions
        .iter()
        .map(|&completed| task_at(0, false, completed))
        .collect();

    let summary = CompletionSummary::for_tasks(&tasks);

    assert_eq!(summary.label(), expected);
}
