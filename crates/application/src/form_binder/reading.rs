use std::collections::BTreeMap;

use serde_json::{Map, Value};

use profiledesk_domain::{
    FieldSpec, FormValue, FormViewModel, HttpMethod, ResourceAction, display_value,
};

/// Values read from a bound form, ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Placeholder values for the URL template.
    pub path_params: BTreeMap<String, String>,
    /// JSON body; `None` for methods without a body.
    pub body: Option<Map<String, Value>>,
}

/// A submission blocked before any request was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalValidationFailure {
    /// Message shown to the operator.
    pub message: String,
}

impl LocalValidationFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Message used when a partial update carries no populated field.
pub const EMPTY_UPDATE_MESSAGE: &str = "Please fill at least one field to update.";

/// Reads path params and body fields of `action` from `view_model`.
///
/// Fields are visited in declaration order and the first empty required value
/// wins. A key is sent when the field is not `omit_if_empty` (blank becomes
/// `null`) or when its trimmed value is non-empty, in which case the value is
/// sent verbatim.
pub fn read_submission(
    action: &ResourceAction,
    view_model: &FormViewModel,
) -> Result<Submission, LocalValidationFailure> {
    let mut path_params = BTreeMap::new();
    for param in action.path_params() {
        let value = view_model.text(param.element_id());
        if value.trim().is_empty() {
            return Err(LocalValidationFailure::new(format!(
                "{} is required.",
                param.label()
            )));
        }
        path_params.insert(param.name().to_owned(), value.to_owned());
    }

    if !action.method().sends_body() {
        return Ok(Submission {
            path_params,
            body: None,
        });
    }

    let mut body = Map::new();
    for field in action.fields() {
        let value = read_field(field, view_model.value(field.element_id()));

        if field.is_required() && value.is_null() {
            return Err(LocalValidationFailure::new(required_message(field)));
        }

        if value.is_null() && field.is_omitted_if_empty() {
            continue;
        }
        body.insert(field.json_key().to_owned(), value);
    }

    if action.method() == HttpMethod::Put && body.values().all(Value::is_null) {
        return Err(LocalValidationFailure::new(EMPTY_UPDATE_MESSAGE));
    }

    Ok(Submission {
        path_params,
        body: Some(body),
    })
}

fn read_field(field: &FieldSpec, value: Option<&FormValue>) -> Value {
    let mut selections = value.map(FormValue::selections).unwrap_or_default();
    if selections.is_empty() {
        return Value::Null;
    }

    if field.kind().is_multi() {
        Value::Array(selections.into_iter().map(Value::String).collect())
    } else {
        selections.pop().map(Value::String).unwrap_or(Value::Null)
    }
}

fn required_message(field: &FieldSpec) -> String {
    if field.kind().is_multi() {
        format!("Select at least one option for {}.", field.label())
    } else {
        format!("{} is required.", field.label())
    }
}

/// Writes each field's JSON value into its element, `""` when absent or null.
#[must_use]
pub fn populate_form(
    view_model: FormViewModel,
    fields: &[FieldSpec],
    json: &Value,
) -> FormViewModel {
    fields.iter().fold(view_model, |view_model, field| {
        let value = match json.get(field.json_key()) {
            Some(Value::Array(items)) => FormValue::Many(
                items
                    .iter()
                    .map(|item| display_value(Some(item)))
                    .collect(),
            ),
            other => FormValue::Single(display_value(other)),
        };
        view_model.with_value(field.element_id(), value)
    })
}
