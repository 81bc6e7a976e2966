use serde::Serialize;
use serde_json::Value;

use profiledesk_domain::{DisplayField, FormViewModel, Notification, RowAction, display_value};

/// Placeholder shown for absent detail values.
pub const MISSING_VALUE: &str = "N/A";

/// One labelled row of a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    /// Row label.
    pub label: String,
    /// Rendered value, `N/A` when absent.
    pub value: String,
}

/// Labelled detail view of one response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Rows in declaration order.
    pub rows: Vec<DetailRow>,
}

/// One row of a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    /// The row object's `id`, empty when absent.
    pub id: String,
    /// Cell values in column order.
    pub cells: Vec<String>,
}

/// Table of a response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Column labels.
    pub columns: Vec<String>,
    /// Rows in response order.
    pub rows: Vec<ListRow>,
    /// Optional per-row action.
    pub row_action: Option<RowAction>,
}

/// What the result panel of a form shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "data")]
pub enum ResultView {
    /// Leave the result panel as it was.
    Unchanged,
    /// Show a detail view.
    Detail(DetailView),
    /// Show a list view.
    List(ListView),
    /// Show a populated edit form.
    EditForm(FormViewModel),
    /// Hide the result panel after a failed read.
    Cleared,
}

/// Everything a page needs to re-render after one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    /// The submitted form, reset when the action asks for it.
    pub form: FormViewModel,
    /// Operator notification, if any.
    pub notification: Option<Notification>,
    /// Result panel update.
    pub result: ResultView,
}

pub(super) fn detail_view(fields: &[DisplayField], json: &Value) -> DetailView {
    DetailView {
        rows: fields
            .iter()
            .map(|field| DetailRow {
                label: field.label.clone(),
                value: cell_value(json, field.json_key.as_str()),
            })
            .collect(),
    }
}

pub(super) fn list_view(
    fields: &[DisplayField],
    row_action: Option<&RowAction>,
    items: &[Value],
) -> ListView {
    ListView {
        columns: fields.iter().map(|field| field.label.clone()).collect(),
        rows: items
            .iter()
            .map(|item| ListRow {
                id: display_value(item.get("id")),
                cells: fields
                    .iter()
                    .map(|field| cell_value(item, field.json_key.as_str()))
                    .collect(),
            })
            .collect(),
        row_action: row_action.cloned(),
    }
}

fn cell_value(json: &Value, key: &str) -> String {
    let value = display_value(json.get(key));
    if value.is_empty() {
        MISSING_VALUE.to_owned()
    } else {
        value
    }
}
