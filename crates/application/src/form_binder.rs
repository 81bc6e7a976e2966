//! Resource form binder.
//!
//! Maps a submitted form to one REST call and the response back to a
//! notification plus a result view. The pipeline is always
//! read → validate → request → render; a local validation failure never
//! reaches the transport.

mod reading;
mod rendering;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use profiledesk_core::{AppError, AppResult};
use profiledesk_domain::{
    FormValue, FormViewModel, Notification, ResourceAction, SubmissionResult, SuccessView,
    fill_template,
};

use crate::binder_ports::{ResourceRequest, ResourceTransport};

pub use reading::{
    EMPTY_UPDATE_MESSAGE, LocalValidationFailure, Submission, populate_form, read_submission,
};
pub use rendering::{
    DetailRow, DetailView, ListRow, ListView, MISSING_VALUE, ResultView, SubmissionOutcome,
};

const LOGGED_BODY_LIMIT: usize = 512;

/// A form id together with the action its submission triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundForm {
    /// Form identifier.
    pub form_id: String,
    /// Bound action.
    pub action: ResourceAction,
}

/// Application service binding forms to resource actions.
#[derive(Clone)]
pub struct FormBinder {
    transport: Arc<dyn ResourceTransport>,
    forms: Vec<BoundForm>,
    index: HashMap<String, usize>,
}

impl FormBinder {
    /// Creates a binder with no bound forms.
    #[must_use]
    pub fn new(transport: Arc<dyn ResourceTransport>) -> Self {
        Self {
            transport,
            forms: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Binds `form_id` to `action`. Each form may be bound once.
    pub fn bind(&mut self, form_id: impl Into<String>, action: ResourceAction) -> AppResult<()> {
        let form_id = form_id.into();
        if form_id.trim().is_empty() {
            return Err(AppError::Validation("form id must not be empty".to_owned()));
        }
        if self.index.contains_key(&form_id) {
            return Err(AppError::Conflict(format!(
                "form '{form_id}' is already bound"
            )));
        }

        self.index.insert(form_id.clone(), self.forms.len());
        self.forms.push(BoundForm { form_id, action });
        Ok(())
    }

    /// Returns bound forms in binding order.
    #[must_use]
    pub fn forms(&self) -> &[BoundForm] {
        &self.forms
    }

    /// Returns the action bound to `form_id`.
    pub fn action(&self, form_id: &str) -> AppResult<&ResourceAction> {
        self.index
            .get(form_id)
            .and_then(|position| self.forms.get(*position))
            .map(|bound| &bound.action)
            .ok_or_else(|| AppError::NotFound(format!("form '{form_id}' is not bound")))
    }

    /// Checks that every populate target and row action names a bound form.
    pub fn ensure_links_bound(&self) -> AppResult<()> {
        for bound in &self.forms {
            let linked = match bound.action.on_success() {
                SuccessView::PopulateForm { target_form, .. } => Some(target_form.as_str()),
                SuccessView::List {
                    row_action: Some(row_action),
                    ..
                } => Some(row_action.form_id.as_str()),
                _ => None,
            };

            if let Some(linked) = linked
                && !self.index.contains_key(linked)
            {
                return Err(AppError::Validation(format!(
                    "form '{}' links to unbound form '{linked}'",
                    bound.form_id
                )));
            }
        }

        Ok(())
    }

    /// Issues the request of `action` and classifies the response.
    ///
    /// Any non-2xx status, transport error, or unparseable 2xx body becomes
    /// a `Failure` carrying the action's fixed message.
    pub async fn execute(
        &self,
        action: &ResourceAction,
        body: Option<&Map<String, Value>>,
        path_params: &BTreeMap<String, String>,
    ) -> SubmissionResult {
        let failure = || SubmissionResult::Failure(action.failure_message().to_owned());

        let path = match action.url_template().expand(path_params) {
            Ok(path) => path,
            Err(error) => {
                warn!(action = action.name(), error = %error, "resource path expansion failed");
                return failure();
            }
        };

        let request = ResourceRequest {
            method: action.method(),
            path,
            body: action
                .method()
                .sends_body()
                .then(|| Value::Object(body.cloned().unwrap_or_default())),
        };
        let method = request.method;
        let path = request.path.to_string();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    action = action.name(),
                    %method,
                    %path,
                    error = %error,
                    "resource request failed before a response was received"
                );
                return failure();
            }
        };

        if !response.is_success() {
            warn!(
                action = action.name(),
                %method,
                %path,
                status = response.status,
                body = truncated(response.body.as_str()),
                "resource request rejected"
            );
            return failure();
        }

        match serde_json::from_str::<Value>(response.body.as_str()) {
            Ok(json) => {
                debug!(
                    action = action.name(),
                    %method,
                    %path,
                    status = response.status,
                    "resource request succeeded"
                );
                SubmissionResult::Success(json)
            }
            Err(error) => {
                warn!(
                    action = action.name(),
                    %method,
                    %path,
                    error = %error,
                    "resource response was not valid JSON"
                );
                failure()
            }
        }
    }

    /// Runs the bound action of `form_id` against the submitted view model.
    ///
    /// Local validation failures and request failures are part of the
    /// outcome; `Err` is reserved for unbound forms and broken bindings.
    pub async fn submit(
        &self,
        form_id: &str,
        view_model: FormViewModel,
    ) -> AppResult<SubmissionOutcome> {
        let action = self.action(form_id)?;

        let submission = match read_submission(action, &view_model) {
            Ok(submission) => submission,
            Err(failure) => {
                debug!(form_id, message = %failure.message, "submission blocked locally");
                return Ok(SubmissionOutcome {
                    form: view_model,
                    notification: Some(Notification::warning(failure.message)),
                    result: ResultView::Unchanged,
                });
            }
        };

        let result = self
            .execute(action, submission.body.as_ref(), &submission.path_params)
            .await;

        info!(
            form_id,
            action = action.name(),
            success = result.is_success(),
            "form submission handled"
        );

        self.render(action, view_model, result)
    }

    fn render(
        &self,
        action: &ResourceAction,
        view_model: FormViewModel,
        result: SubmissionResult,
    ) -> AppResult<SubmissionOutcome> {
        let json = match result {
            SubmissionResult::Success(json) => json,
            SubmissionResult::Failure(message) => {
                let result = match action.on_success() {
                    SuccessView::Notify { .. } => ResultView::Unchanged,
                    SuccessView::Detail { .. }
                    | SuccessView::List { .. }
                    | SuccessView::PopulateForm { .. } => ResultView::Cleared,
                };
                return Ok(SubmissionOutcome {
                    form: view_model,
                    notification: Some(Notification::danger(message)),
                    result,
                });
            }
        };

        match action.on_success() {
            SuccessView::Notify {
                message,
                reset_form,
            } => Ok(SubmissionOutcome {
                form: if *reset_form {
                    view_model.reset()
                } else {
                    view_model
                },
                notification: Some(Notification::success(fill_template(message, &json))),
                result: ResultView::Unchanged,
            }),
            SuccessView::Detail { fields } => Ok(SubmissionOutcome {
                form: view_model,
                notification: None,
                result: ResultView::Detail(rendering::detail_view(fields, &json)),
            }),
            SuccessView::List { fields, row_action } => {
                let Some(items) = json.as_array() else {
                    warn!(action = action.name(), "list response was not a JSON array");
                    return Ok(SubmissionOutcome {
                        form: view_model,
                        notification: Some(Notification::danger(action.failure_message())),
                        result: ResultView::Cleared,
                    });
                };

                Ok(SubmissionOutcome {
                    form: view_model,
                    notification: None,
                    result: ResultView::List(rendering::list_view(
                        fields,
                        row_action.as_ref(),
                        items,
                    )),
                })
            }
            SuccessView::PopulateForm {
                target_form,
                carry_over,
                message,
            } => {
                let target_action = self.action(target_form)?;
                let target = carry_over.iter().fold(
                    FormViewModel::new(target_form.as_str()),
                    |target, carried| {
                        target.with_value(
                            carried.to_element.as_str(),
                            FormValue::Single(
                                view_model.text(carried.from_element.as_str()).to_owned(),
                            ),
                        )
                    },
                );
                let target = populate_form(target, target_action.fields(), &json).shown();

                Ok(SubmissionOutcome {
                    form: view_model,
                    notification: Some(Notification::success(fill_template(message, &json))),
                    result: ResultView::EditForm(target),
                })
            }
        }
    }
}

fn truncated(body: &str) -> &str {
    match body.char_indices().nth(LOGGED_BODY_LIMIT) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}
