use axum::extract::{Path, State};
use axum::{Extension, Json};

use compass_core::models::compass::CompassEntry;
use compass_storage::compass;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CompassEntry>>, ApiError> {
    let entries = compass::list(state.store.as_ref(), &user.sub).await?;
    Ok(Json(entries))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(date): Path<String>,
) -> Result<Json<CompassEntry>, ApiError> {
    let entry = compass::get(state.store.as_ref(), &user.sub, &date).await?;
    Ok(Json(entry))
}
