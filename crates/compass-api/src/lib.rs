//! compass-api
//!
//! HTTP surface for Compass: generation endpoints, the compass view, user
//! administration, and the mentor question bank.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
///
/// Everything except `/health` and `/mentor-interest` sits behind the
/// bearer-token guard, which rejects before any handler runs.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/generate-question",
            post(routes::generation::generate_question),
        )
        .route("/daily-summary", post(routes::generation::daily_summary))
        .route("/compass-view", get(routes::compass_view::list_entries))
        .route("/compass-view/{date}", get(routes::compass_view::get_entry))
        .route("/users", get(routes::users::list_users))
        .route("/user/{user_id}", delete(routes::users::delete_user))
        .route(
            "/mentor-questions",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/mentor-questions/{id}",
            get(routes::questions::get_question),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Public form submission
        .route(
            "/mentor-interest",
            post(routes::mentor_interest::submit_interest),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
