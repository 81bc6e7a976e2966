//! Console page model and its tera rendering.
//!
//! The page is rebuilt on every request: every bound form starts from an empty
//! view model and the outcome of the current submission is layered on top.

use std::collections::HashSet;

use profiledesk_application::{BoundForm, FormBinder, ResultView, SubmissionOutcome};
use profiledesk_core::{AppError, AppResult};
use profiledesk_domain::{FieldKind, FormValue, FormViewModel, Notification, SuccessView};
use serde::Serialize;
use tera::{Context, Tera};

pub const CONSOLE_TEMPLATE: &str = "console.html";

/// Loads the embedded page templates. `.html` templates are autoescaped.
pub fn load_templates() -> AppResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(CONSOLE_TEMPLATE, include_str!("../templates/console.html"))
        .map_err(|error| AppError::Internal(format!("failed to load console template: {error}")))?;
    Ok(tera)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// One rendered form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub element_id: String,
    pub label: String,
    pub control: &'static str,
    pub required: bool,
    pub value: String,
    pub options: Vec<SelectOption>,
}

/// One form with its notification and result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPanel {
    pub form_id: String,
    pub title: String,
    pub section: String,
    pub visible: bool,
    pub inputs: Vec<InputView>,
    pub notification: Option<Notification>,
    pub result: Option<ResultView>,
}

impl FormPanel {
    fn new(bound: &BoundForm, view_model: &FormViewModel) -> Self {
        let action = &bound.action;

        let path_inputs = action.path_params().iter().map(|param| InputView {
            element_id: param.element_id().to_owned(),
            label: param.label().to_owned(),
            control: "text",
            required: true,
            value: view_model.text(param.element_id()).to_owned(),
            options: Vec::new(),
        });
        let field_inputs = action.fields().iter().map(|field| {
            let value = view_model.value(field.element_id());
            InputView {
                element_id: field.element_id().to_owned(),
                label: field.label().to_owned(),
                control: control_name(field.kind()),
                required: field.is_required(),
                value: value.map(FormValue::as_text).unwrap_or_default().to_owned(),
                options: field
                    .kind()
                    .options()
                    .iter()
                    .map(|option| SelectOption {
                        value: option.clone(),
                        selected: value.is_some_and(|value| value.contains(option)),
                    })
                    .collect(),
            }
        });

        Self {
            form_id: bound.form_id.clone(),
            title: sentence_case(action.name()),
            section: section_title(action.url_template().as_str()),
            visible: view_model.is_visible(),
            inputs: path_inputs.chain(field_inputs).collect(),
            notification: None,
            result: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct SectionView<'a> {
    title: &'a str,
    panels: Vec<&'a FormPanel>,
}

/// Every form of the console, in binding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolePage {
    panels: Vec<FormPanel>,
}

impl ConsolePage {
    /// Builds the initial page. Forms filled by a lookup start hidden.
    #[must_use]
    pub fn new(binder: &FormBinder) -> Self {
        let populate_targets: HashSet<&str> = binder
            .forms()
            .iter()
            .filter_map(|bound| match bound.action.on_success() {
                SuccessView::PopulateForm { target_form, .. } => Some(target_form.as_str()),
                _ => None,
            })
            .collect();

        let panels = binder
            .forms()
            .iter()
            .map(|bound| {
                let view_model = FormViewModel::new(bound.form_id.as_str());
                let view_model = if populate_targets.contains(bound.form_id.as_str()) {
                    view_model.hidden()
                } else {
                    view_model
                };
                FormPanel::new(bound, &view_model)
            })
            .collect();

        Self { panels }
    }

    /// Applies the outcome of one submission to the page.
    pub fn with_outcome(
        mut self,
        binder: &FormBinder,
        outcome: SubmissionOutcome,
    ) -> AppResult<Self> {
        let SubmissionOutcome {
            form,
            notification,
            result,
        } = outcome;

        let (panel_result, edit_form) = match result {
            ResultView::Detail(_) | ResultView::List(_) => (Some(result), None),
            ResultView::EditForm(target) => (None, Some(target)),
            ResultView::Unchanged | ResultView::Cleared => (None, None),
        };

        let panel = self.replace_panel(binder, &form)?;
        panel.notification = notification;
        panel.result = panel_result;

        if let Some(target) = edit_form {
            self.replace_panel(binder, &target)?;
        }

        Ok(self)
    }

    /// Renders the page as HTML.
    pub fn render(&self, templates: &Tera) -> AppResult<String> {
        let mut sections: Vec<SectionView<'_>> = Vec::new();
        for panel in &self.panels {
            if sections
                .last()
                .is_none_or(|section| section.title != panel.section)
            {
                sections.push(SectionView {
                    title: panel.section.as_str(),
                    panels: Vec::new(),
                });
            }
            if let Some(section) = sections.last_mut() {
                section.panels.push(panel);
            }
        }

        let mut context = Context::new();
        context.insert("sections", &sections);

        templates
            .render(CONSOLE_TEMPLATE, &context)
            .map_err(|error| AppError::Internal(format!("failed to render console page: {error}")))
    }

    fn replace_panel(
        &mut self,
        binder: &FormBinder,
        view_model: &FormViewModel,
    ) -> AppResult<&mut FormPanel> {
        let form_id = view_model.form_id();
        let bound = binder
            .forms()
            .iter()
            .find(|bound| bound.form_id == form_id)
            .ok_or_else(|| AppError::NotFound(format!("form '{form_id}' is not bound")))?;
        let panel = self
            .panels
            .iter_mut()
            .find(|panel| panel.form_id == form_id)
            .ok_or_else(|| AppError::NotFound(format!("form '{form_id}' has no panel")))?;

        *panel = FormPanel::new(bound, view_model);
        Ok(panel)
    }
}

fn control_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::LongText => "textarea",
        FieldKind::Choice(_) => "select",
        FieldKind::MultiChoice(_) => "multiselect",
    }
}

fn section_title(url_template: &str) -> String {
    let resource = url_template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .nth(1)
        .unwrap_or(url_template);
    sentence_case(&resource.replace('-', " "))
}

fn sentence_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
