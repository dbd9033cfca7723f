pub mod health;

use axum::{
    routing::{any, get},
    Router,
};

use crate::leads;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume directory
        .route(
            "/api/candidates",
            get(resume::handlers::list_candidates).post(resume::handlers::create_candidate),
        )
        .route("/api/candidates/:id", get(resume::handlers::candidate_detail))
        // Lead webhook. Registered for every method so the handler can answer
        // non-POST with the contract's own 405 body.
        .route("/api/create-lead/", any(leads::handlers::create_lead))
        .with_state(state)
}
