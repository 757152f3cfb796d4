pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::targets::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring
        .route("/api/v1/targets/compile", post(handlers::handle_compile))
        .route("/api/v1/targets/progress", post(handlers::handle_progress))
        // Onboarding
        .route(
            "/api/v1/personas/compatibility",
            get(handlers::handle_compatibility),
        )
        .route("/api/v1/personas/setup", get(handlers::handle_setup))
        .route(
            "/api/v1/personas/:stage/goals",
            get(handlers::handle_goal_options),
        )
        .with_state(state)
}
