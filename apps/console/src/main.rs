//! Profile Desk console composition root.

#![forbid(unsafe_code)]

mod console_config;
mod console_router;
mod dto;
mod error;
mod handlers;
mod pages;
mod state;

use std::sync::Arc;

use profiledesk_application::build_form_binder;
use profiledesk_core::AppError;
use profiledesk_infrastructure::HttpResourceTransport;
use tracing::info;

use crate::console_config::{ConsoleConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load()?;

    let transport =
        HttpResourceTransport::new(config.http_client()?, config.backend_base_url.clone())?;
    let binder = build_form_binder(Arc::new(transport))?;
    info!(forms = binder.forms().len(), "resource forms bound");

    let app_state = AppState {
        binder: Arc::new(binder),
        templates: Arc::new(pages::load_templates()?),
    };
    let app = console_router::build_router(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, backend = %config.backend_base_url, "profiledesk-console listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("console server error: {error}")))
}
