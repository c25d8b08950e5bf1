use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use compass_core::models::mentor::{MentorInterestForm, MentorInterestSubmission};
use compass_core::validation::validate_mentor_interest;
use compass_storage::mentor_interest;

use crate::error::ApiError;
use crate::state::AppState;

/// Accept a mentor-interest form. The same rules the client applies are
/// re-checked here before anything is stored.
pub async fn submit_interest(
    State(state): State<AppState>,
    body: Result<Json<MentorInterestForm>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorInterestSubmission>), ApiError> {
    let Json(form) = body?;
    let form = validate_mentor_interest(form)?;
    let submission =
        mentor_interest::submit(state.store.as_ref(), form, jiff::Timestamp::now()).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}
