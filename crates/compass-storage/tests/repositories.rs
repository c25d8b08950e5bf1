use compass_core::models::generation::{GenerationKind, GenerationRequest};
use compass_core::models::mentor::MentorInterestForm;
use compass_core::models::question::NewMentorQuestion;
use compass_core::models::user::User;
use compass_storage::error::StorageError;
use compass_storage::memory::MemoryStore;
use compass_storage::store::ObjectStore;
use compass_storage::{compass, mentor_interest, questions, users};
use pretty_assertions::assert_eq;

fn user(id: &str, created: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        first_name: id.to_uppercase(),
        last_name: None,
        created_at: created.parse().unwrap(),
    }
}

#[tokio::test]
async fn question_insert_stamps_creation_time() {
    let store = MemoryStore::new();
    let now = jiff::Timestamp::now();

    let stored = questions::insert(&store, NewMentorQuestion::new("What went well?", "Purpose"), now)
        .await
        .unwrap();

    assert_eq!(stored.date_added, now);
    let loaded = questions::get(&store, stored.id).await.unwrap();
    assert_eq!(loaded, stored);
}

#[tokio::test]
async fn question_without_required_fields_is_not_written() {
    let store = MemoryStore::new();
    let missing_pillar = NewMentorQuestion {
        question: Some("Orphan question".to_string()),
        ..NewMentorQuestion::default()
    };

    let err = questions::insert(&store, missing_pillar, jiff::Timestamp::now())
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::InvalidRecord(_)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn questions_filter_by_pillar() {
    let store = MemoryStore::new();
    let t0: jiff::Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
    let t1: jiff::Timestamp = "2024-01-02T00:00:00Z".parse().unwrap();
    questions::insert(&store, NewMentorQuestion::new("b", "Growth"), t1).await.unwrap();
    questions::insert(&store, NewMentorQuestion::new("a", "Growth"), t0).await.unwrap();
    questions::insert(&store, NewMentorQuestion::new("c", "Health"), t0).await.unwrap();

    let growth = questions::list(&store, Some("growth")).await.unwrap();
    let texts: Vec<&str> = growth.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
    assert_eq!(questions::list(&store, None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn deleting_unknown_user_is_not_found() {
    let store = MemoryStore::new();
    users::put(&store, &user("u1", "2024-01-01T00:00:00Z")).await.unwrap();

    assert!(matches!(
        users::delete(&store, "ghost").await,
        Err(StorageError::NotFound { .. })
    ));
    users::delete(&store, "u1").await.unwrap();
    assert!(users::list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn users_list_ordered_by_creation() {
    let store = MemoryStore::new();
    users::put(&store, &user("zed", "2024-01-01T00:00:00Z")).await.unwrap();
    users::put(&store, &user("amy", "2024-03-01T00:00:00Z")).await.unwrap();

    let ids: Vec<String> = users::list(&store).await.unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["zed", "amy"]);
}

#[tokio::test]
async fn compass_entry_accumulates_generated_output() {
    let store = MemoryStore::new();
    let req = GenerationRequest {
        date: "2024-01-01".to_string(),
        free_text: "Today I felt...".to_string(),
    };
    let now = jiff::Timestamp::now();

    compass::record_generation(&store, "sub-1", &req, GenerationKind::DailySummary, "Summary.", now)
        .await
        .unwrap();
    let entry = compass::record_generation(
        &store,
        "sub-1",
        &req,
        GenerationKind::ReflectionQuestion,
        "What next?",
        now,
    )
    .await
    .unwrap();

    assert_eq!(entry.summary.as_deref(), Some("Summary."));
    assert_eq!(entry.question.as_deref(), Some("What next?"));
    assert_eq!(compass::get(&store, "sub-1", "2024-01-01").await.unwrap(), entry);
    assert!(matches!(
        compass::get(&store, "sub-2", "2024-01-01").await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn mentor_interest_round_trips_through_store() {
    let store = MemoryStore::new();
    let form = MentorInterestForm {
        first_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        job_title: "Engineer".to_string(),
        industry: "Software".to_string(),
        career_stage: "Senior".to_string(),
        ..MentorInterestForm::default()
    };

    let submission = mentor_interest::submit(&store, form.clone(), jiff::Timestamp::now())
        .await
        .unwrap();

    let all = mentor_interest::list(&store).await.unwrap();
    assert_eq!(all, vec![submission]);
    assert_eq!(all[0].form, form);
}

#[tokio::test]
async fn memory_store_lists_only_matching_prefix() {
    let store = MemoryStore::new();
    store.put("users/a.json", b"{}".to_vec(), None).await.unwrap();
    store.put("usersx/b.json", b"{}".to_vec(), None).await.unwrap();
    store.put("questions/c.json", b"{}".to_vec(), None).await.unwrap();

    assert_eq!(store.list("users/").await.unwrap(), vec!["users/a.json"]);
    assert!(store.exists("questions/c.json").await.unwrap());
    assert!(!store.exists("questions/d.json").await.unwrap());
}
