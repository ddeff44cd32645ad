pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/career-paths/analyze",
            post(handlers::handle_analyze_career_paths),
        )
        .route(
            "/api/v1/users/:user_id/career-paths",
            get(handlers::handle_user_career_paths),
        )
        .route(
            "/api/v1/jobs/match-percentage",
            post(handlers::handle_job_match_percentage),
        )
        .route(
            "/api/v1/users/:user_id/job-matches",
            get(handlers::handle_user_job_matches),
        )
        .with_state(state)
}
