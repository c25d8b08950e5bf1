use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use compass_core::models::question::{MentorQuestion, NewMentorQuestion};
use compass_storage::questions;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionFilter {
    pub pillar: Option<String>,
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(filter): Query<QuestionFilter>,
) -> Result<Json<Vec<MentorQuestion>>, ApiError> {
    let pillar = filter.pillar.as_deref().filter(|p| !p.is_empty());
    Ok(Json(questions::list(state.store.as_ref(), pillar).await?))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MentorQuestion>, ApiError> {
    Ok(Json(questions::get(state.store.as_ref(), id).await?))
}

pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<NewMentorQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorQuestion>), ApiError> {
    let Json(new) = body?;
    let question = questions::insert(state.store.as_ref(), new, jiff::Timestamp::now()).await?;
    Ok((StatusCode::CREATED, Json(question)))
}
