//! Axum router for the contact book HTTP surface.
//!
//! Routes: `GET /` (list), `GET|POST /add`, `GET|POST /edit/{id}`,
//! `GET /delete/{id}`, `GET /health` (liveness).

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use crate::server::handlers;
use crate::services::ContactService;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The contact store.
    pub service: Arc<dyn ContactService>,
}

/// Builds the axum `Router` with all contact routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add_form).post(handlers::add_submit))
        .route(
            "/edit/:id",
            get(handlers::edit_form).post(handlers::edit_submit),
        )
        .route("/delete/:id", get(handlers::delete))
        .route("/health", get(handlers::health))
        .with_state(state)
}
