use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::forms::console_page_handler))
        .route(
            "/forms/{form_id}",
            post(handlers::forms::submit_form_handler),
        )
        .route("/health", get(handlers::health::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
