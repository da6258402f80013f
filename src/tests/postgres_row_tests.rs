//! Row conversion tests for the `PostgreSQL` store.

use crate::adapters::postgres::{TaskRow, row_to_task, to_new_row};
use crate::domain::{Owner, Task};
use crate::tests::support::{base_time, persisted};
use chrono::Duration;
use rstest::rstest;

fn sample_row(owner: &str) -> TaskRow {
    TaskRow {
        id: uuid::Uuid::new_v4(),
        text: "Pagar contas".to_owned(),
        completed: false,
        owner: owner.to_owned(),
        important: Some(true),
        due_date: Some(base_time() + Duration::days(2)),
        created_at: base_time(),
    }
}

#[rstest]
fn row_maps_every_field_onto_the_task() {
    let row = sample_row("ana");
    let row_id = row.id;

    let task = row_to_task(row).expect("valid owner");

    assert_eq!(task.id().into_inner(), row_id);
    assert_eq!(task.text(), "Pagar contas");
    assert_eq!(task.owner(), Owner::Ana);
    assert!(task.important());
    assert_eq!(task.due_date(), Some(base_time() + Duration::days(2)));
    assert_eq!(task.created_at(), base_time());
}

#[rstest]
fn null_importance_reads_as_not_important() {
    let mut row = sample_row("matheus");
    row.important = None;

    let task = row_to_task(row).expect("valid owner");

    assert!(!task.important());
}

#[rstest]
fn rows_with_unknown_owners_are_skipped() {
    assert!(row_to_task(sample_row("carlos")).is_none());
}

#[rstest]
fn new_rows_write_importance_explicitly() {
    let task = Task::from_persisted(persisted(Owner::Matheus, "Mercado", base_time()));

    let row = to_new_row(&task);

    assert_eq!(row.important, Some(false));
    assert_eq!(row.owner, "matheus");
    assert_eq!(row.due_date, None);
}

#[rstest]
fn insert_and_fetch_shapes_round_trip() {
    let mut data = persisted(Owner::Ana, "Farmácia", base_time());
    data.important = true;
    data.due_date = Some(base_time() + Duration::hours(6));
    let task = Task::from_persisted(data);

    let new_row = to_new_row(&task);
    let fetched = row_to_task(TaskRow {
        id: new_row.id,
        text: new_row.text,
        completed: new_row.completed,
        owner: new_row.owner,
        important: new_row.important,
        due_date: new_row.due_date,
        created_at: new_row.created_at,
    })
    .expect("valid owner");

    assert_eq!(fetched, task);
}
