//! End-to-end session flows over a shared in-memory store.

use super::helpers::{assert_single_task, session_over};
use rstest::rstest;
use tandem::adapters::memory::InMemoryTaskStore;
use tandem::domain::Owner;
use tandem::services::Notice;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_tasks_survive_a_session_restart() {
    let store = InMemoryTaskStore::new();
    let (mut first_session, _notices) = session_over(&store);
    first_session.load().await;
    first_session.add_task(Owner::Matheus, "Mercado", false).await;
    first_session.add_task(Owner::Ana, "Farmácia", true).await;
    drop(first_session);

    let (mut second_session, _later_notices) = session_over(&store);
    second_session.load().await;

    assert_single_task(second_session.state(), Owner::Matheus, "Mercado")
        .expect("matheus task survived");
    assert_single_task(second_session.state(), Owner::Ana, "Farmácia")
        .expect("ana task survived");
    let ana_task = second_session
        .state()
        .owned(Owner::Ana)
        .first()
        .expect("task present");
    assert!(ana_task.important());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_toggles_survive_a_session_restart() {
    let store = InMemoryTaskStore::new();
    let (mut first_session, _notices) = session_over(&store);
    first_session.load().await;
    first_session.add_task(Owner::Matheus, "Mercado", false).await;
    let id = first_session
        .state()
        .owned(Owner::Matheus)
        .first()
        .expect("task added")
        .id();
    first_session.toggle_completion(Owner::Matheus, id).await;
    drop(first_session);

    let (mut second_session, _later_notices) = session_over(&store);
    second_session.load().await;

    let task = second_session
        .state()
        .find(Owner::Matheus, id)
        .expect("task survived");
    assert!(task.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removal_empties_the_shared_store() {
    let store = InMemoryTaskStore::new();
    let (mut session, mut notices) = session_over(&store);
    session.load().await;
    session.add_task(Owner::Ana, "Correios", false).await;
    let id = session
        .state()
        .owned(Owner::Ana)
        .first()
        .expect("task added")
        .id();

    session.remove_task(Owner::Ana, id).await;

    assert!(store.snapshot().expect("store snapshot").is_empty());
    assert_eq!(
        notices.try_recv(),
        Ok(Notice::TaskAdded { owner: Owner::Ana })
    );
    assert_eq!(notices.try_recv(), Ok(Notice::TaskRemoved));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_active_view_reflects_importance_across_a_flow() {
    let store = InMemoryTaskStore::new();
    let (mut session, _notices) = session_over(&store);
    session.load().await;
    session.add_task(Owner::Matheus, "Mercado", false).await;
    session.add_task(Owner::Matheus, "Aluguel", false).await;
    let rent_id = session
        .state()
        .owned(Owner::Matheus)
        .last()
        .expect("task added")
        .id();

    session.toggle_importance(Owner::Matheus, rent_id).await;

    let texts: Vec<String> = session
        .visible_tasks(Owner::Matheus, false)
        .iter()
        .map(|task| task.text().to_owned())
        .collect();
    assert_eq!(texts, vec!["Aluguel", "Mercado"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_tasks_move_between_the_two_views() {
    let store = InMemoryTaskStore::new();
    let (mut session, _notices) = session_over(&store);
    session.load().await;
    session.add_task(Owner::Ana, "Farmácia", false).await;
    let id = session
        .state()
        .owned(Owner::Ana)
        .first()
        .expect("task added")
        .id();

    session.toggle_completion(Owner::Ana, id).await;

    assert!(session.visible_tasks(Owner::Ana, false).is_empty());
    assert_eq!(session.visible_tasks(Owner::Ana, true).len(), 1);
    assert_eq!(session.summary(Owner::Ana).label(), "Tudo concluído!");
}
