use axum::extract::{Path, State};
use axum::{Extension, Json};

use compass_core::models::user::{DeleteUserResponse, User};
use compass_storage::users;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(users::list(state.store.as_ref()).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    users::delete(state.store.as_ref(), &user_id).await?;
    tracing::info!(user_id = %user_id, deleted_by = %caller.sub, "user removed");

    Ok(Json(DeleteUserResponse {
        message: "deleted".to_string(),
        deleted_user_id: user_id,
    }))
}
