//! Router setup and configuration.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, health, questions};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Probe routes
    let mut router = Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health));

    if state.metrics.is_some() {
        router = router.route(
            &state.config.observability.metrics_path,
            get(health::metrics),
        );
    }

    router
        .route("/", get(questions::generate_questions))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
