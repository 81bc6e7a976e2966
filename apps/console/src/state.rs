use std::sync::Arc;

use profiledesk_application::FormBinder;
use tera::Tera;

/// Shared console state.
#[derive(Clone)]
pub struct AppState {
    pub binder: Arc<FormBinder>,
    pub templates: Arc<Tera>,
}
