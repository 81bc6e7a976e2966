use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// The request succeeded.
    Success,
    /// The submission was blocked locally.
    Warning,
    /// The request failed.
    Danger,
}

impl NotificationLevel {
    /// Returns the stable style name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Message shown to the operator after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Creates a warning notification.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    /// Creates a danger notification.
    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Danger,
            message: message.into(),
        }
    }
}

/// Classified outcome of one REST call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// 2xx response with a JSON body.
    Success(Value),
    /// Any other outcome, carrying the fixed per-action message.
    Failure(String),
}

impl SubmissionResult {
    /// Returns whether the call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Fills `{key}` placeholders from top-level keys of a JSON object.
///
/// Strings are inserted as-is, other values as JSON text, absent keys and
/// `null` as an empty string. Unterminated braces are kept literally.
#[must_use]
pub fn fill_template(template: &str, json: &Value) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];
        let Some(end) = after_brace.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_brace[..end];
        output.push_str(&display_value(json.get(key)));
        rest = &after_brace[end + 1..];
    }

    output.push_str(rest);
    output
}

/// Renders a JSON value the way a text input shows it.
#[must_use]
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{SubmissionResult, display_value, fill_template};

    #[test]
    fn template_fills_response_keys() {
        let message = fill_template(
            "Tenant created successfully with ID: {id}",
            &json!({"id": "abc"}),
        );
        assert_eq!(message, "Tenant created successfully with ID: abc");
    }

    #[test]
    fn template_blanks_missing_keys_and_keeps_open_braces() {
        assert_eq!(fill_template("ID: {id}", &json!({})), "ID: ");
        assert_eq!(fill_template("count {n} of {", &json!({"n": 3})), "count 3 of {");
    }

    #[test]
    fn arrays_render_comma_separated() {
        let value = json!(["TENANT_ADMIN", "TENANT_USER"]);
        assert_eq!(display_value(Some(&value)), "TENANT_ADMIN, TENANT_USER");
        assert_eq!(display_value(Some(&json!(null))), "");
    }

    #[test]
    fn failure_is_not_success() {
        assert!(!SubmissionResult::Failure("Error creating tenant".to_owned()).is_success());
        assert!(SubmissionResult::Success(json!({})).is_success());
    }
}
