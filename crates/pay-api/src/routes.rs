//! # Routes
//!
//! Axum router configuration for the playground.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - GET  /                 - Payment form
/// - POST /perform_payment  - Authorise
/// - POST /perform_capture  - Capture
/// - POST /perform_cancel   - Cancel
/// - POST /perform_refund   - Refund
/// - GET  /perform_lookup   - HPP payment methods
/// - GET  /perform_hpp      - Redirect to HPP
/// - GET  /static/*         - Static assets
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Payment form
        .route("/", get(handlers::show_form))
        // Payment API
        .route("/perform_payment", post(handlers::perform_payment))
        .route("/perform_capture", post(handlers::perform_capture))
        .route("/perform_cancel", post(handlers::perform_cancel))
        .route("/perform_refund", post(handlers::perform_refund))
        // Hosted payment pages
        .route("/perform_lookup", get(handlers::perform_lookup))
        .route("/perform_hpp", get(handlers::perform_hpp))
        // Static assets
        .nest_service("/static", static_files)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
