use tracing::info;
use uuid::Uuid;

use compass_core::keys;
use compass_core::models::mentor::{MentorInterestForm, MentorInterestSubmission};

use crate::error::StorageError;
use crate::records;
use crate::store::ObjectStore;

/// Store an already-validated mentor interest form.
pub async fn submit(
    store: &dyn ObjectStore,
    form: MentorInterestForm,
    now: jiff::Timestamp,
) -> Result<MentorInterestSubmission, StorageError> {
    let submission = MentorInterestSubmission {
        id: Uuid::new_v4(),
        form,
        submitted_at: now,
    };
    records::save(store, &keys::mentor_interest(submission.id), &submission).await?;
    info!(id = %submission.id, "mentor interest recorded");
    Ok(submission)
}

pub async fn list(store: &dyn ObjectStore) -> Result<Vec<MentorInterestSubmission>, StorageError> {
    let mut submissions: Vec<MentorInterestSubmission> =
        records::load_all(store, keys::MENTOR_INTEREST_PREFIX).await?;
    submissions.sort_by_key(|s| s.submitted_at);
    Ok(submissions)
}
