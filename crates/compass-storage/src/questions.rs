use tracing::info;
use uuid::Uuid;

use compass_core::keys;
use compass_core::models::question::{MentorQuestion, NewMentorQuestion};

use crate::error::StorageError;
use crate::records;
use crate::store::ObjectStore;

/// Persist a new mentor question.
///
/// Required fields are enforced here regardless of what callers checked:
/// a record without `question` or `pillar` never reaches the store.
pub async fn insert(
    store: &dyn ObjectStore,
    new: NewMentorQuestion,
    now: jiff::Timestamp,
) -> Result<MentorQuestion, StorageError> {
    let record = new.into_record(now)?;
    records::save(store, &keys::question(record.id), &record).await?;
    info!(id = %record.id, pillar = %record.pillar, "mentor question stored");
    Ok(record)
}

pub async fn get(store: &dyn ObjectStore, id: Uuid) -> Result<MentorQuestion, StorageError> {
    records::load(store, &keys::question(id)).await
}

/// All questions, oldest first, optionally restricted to one pillar
/// (case-insensitive).
pub async fn list(
    store: &dyn ObjectStore,
    pillar: Option<&str>,
) -> Result<Vec<MentorQuestion>, StorageError> {
    let mut questions: Vec<MentorQuestion> =
        records::load_all(store, keys::QUESTIONS_PREFIX).await?;
    if let Some(pillar) = pillar {
        questions.retain(|q| q.pillar.eq_ignore_ascii_case(pillar));
    }
    questions.sort_by_key(|q| q.date_added);
    Ok(questions)
}
