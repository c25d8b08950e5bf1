use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use compass_auth::error::AuthError;
use compass_auth::jwt::bearer_token;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and validates it.
/// On success, inserts [`AuthUser`] into request extensions for handlers to
/// use; on failure the request ends here with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.verifier.verify(bearer_token(header)?).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthUser {
        sub: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
    pub email: Option<String>,
}
