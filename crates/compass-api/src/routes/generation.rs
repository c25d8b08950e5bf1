use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use compass_bedrock::reflection;
use compass_core::models::generation::{GenerationKind, GenerationRequest, GenerationResponse};
use compass_core::validation::validate_generation_request;
use compass_storage::compass;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Generate a reflection question for the caller's day.
pub async fn generate_question(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let Json(req) = body?;
    generate(&state, &user, GenerationKind::ReflectionQuestion, req).await
}

/// Generate a summary of the caller's day.
pub async fn daily_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let Json(req) = body?;
    generate(&state, &user, GenerationKind::DailySummary, req).await
}

async fn generate(
    state: &AppState,
    user: &AuthUser,
    kind: GenerationKind,
    req: GenerationRequest,
) -> Result<Json<GenerationResponse>, ApiError> {
    let req = validate_generation_request(req)?;

    let outcome = reflection::generate(state.generator.as_ref(), kind, &req).await?;

    compass::record_generation(
        state.store.as_ref(),
        &user.sub,
        &req,
        kind,
        &outcome.response.summary,
        jiff::Timestamp::now(),
    )
    .await?;

    Ok(Json(outcome.response))
}
