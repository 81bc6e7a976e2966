use axum::extract::{Path, State};
use axum::response::Html;
use profiledesk_domain::FormViewModel;
use tracing::debug;
use url::form_urlencoded;

use crate::error::ConsoleResult;
use crate::pages::ConsolePage;
use crate::state::AppState;

pub async fn console_page_handler(State(state): State<AppState>) -> ConsoleResult<Html<String>> {
    let page = ConsolePage::new(&state.binder);
    Ok(Html(page.render(&state.templates)?))
}

/// Runs the form bound to `form_id` and re-renders the page with its outcome.
///
/// Repeated keys in the urlencoded body become multi-selections.
pub async fn submit_form_handler(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    body: String,
) -> ConsoleResult<Html<String>> {
    let view_model = FormViewModel::from_pairs(
        form_id.as_str(),
        form_urlencoded::parse(body.as_bytes()).into_owned(),
    );
    debug!(
        form_id = form_id.as_str(),
        fields = view_model.values().len(),
        "form submitted"
    );

    let outcome = state.binder.submit(&form_id, view_model).await?;
    let page = ConsolePage::new(&state.binder).with_outcome(&state.binder, outcome)?;

    Ok(Html(page.render(&state.templates)?))
}
