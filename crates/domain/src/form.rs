use std::collections::HashSet;

use profiledesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Input control rendered for a bound form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "options")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    LongText,
    /// Single selection from a fixed option list.
    Choice(Vec<String>),
    /// Any number of selections from a fixed option list, sent as a JSON array.
    MultiChoice(Vec<String>),
}

impl FieldKind {
    /// Returns whether the field carries a set of values rather than one string.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::MultiChoice(_))
    }

    /// Returns rendering options for choice fields.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Self::Choice(options) | Self::MultiChoice(options) => options,
            Self::Text | Self::LongText => &[],
        }
    }
}

/// Declares how one form field maps to one JSON body key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    element_id: NonEmptyString,
    json_key: NonEmptyString,
    label: NonEmptyString,
    kind: FieldKind,
    required: bool,
    omit_if_empty: bool,
}

impl FieldSpec {
    /// Creates an optional field that is sent as `null` when left empty.
    pub fn new(
        element_id: impl Into<String>,
        json_key: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
    ) -> AppResult<Self> {
        if let FieldKind::Choice(options) | FieldKind::MultiChoice(options) = &kind
            && options.is_empty()
        {
            return Err(AppError::Validation(
                "choice fields must declare at least one option".to_owned(),
            ));
        }

        Ok(Self {
            element_id: NonEmptyString::new(element_id)?,
            json_key: NonEmptyString::new(json_key)?,
            label: NonEmptyString::new(label)?,
            kind,
            required: false,
            omit_if_empty: false,
        })
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Leaves the key out of the body when the trimmed value is empty.
    #[must_use]
    pub fn omit_if_empty(mut self) -> Self {
        self.omit_if_empty = true;
        self
    }

    /// Returns the form element identifier.
    #[must_use]
    pub fn element_id(&self) -> &str {
        self.element_id.as_str()
    }

    /// Returns the JSON body key.
    #[must_use]
    pub fn json_key(&self) -> &str {
        self.json_key.as_str()
    }

    /// Returns the human readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns the input kind.
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns whether an empty value blocks submission.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether an empty value is left out of the body.
    #[must_use]
    pub fn is_omitted_if_empty(&self) -> bool {
        self.omit_if_empty
    }
}

/// A form field whose value fills a `{name}` placeholder of the URL template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    element_id: NonEmptyString,
    name: NonEmptyString,
    label: NonEmptyString,
}

impl PathParam {
    /// Creates a path parameter binding.
    pub fn new(
        element_id: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            element_id: NonEmptyString::new(element_id)?,
            name: NonEmptyString::new(name)?,
            label: NonEmptyString::new(label)?,
        })
    }

    /// Returns the form element identifier.
    #[must_use]
    pub fn element_id(&self) -> &str {
        self.element_id.as_str()
    }

    /// Returns the placeholder name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

/// Rejects duplicate element ids across path params and body fields.
pub(crate) fn ensure_unique_elements(
    path_params: &[PathParam],
    fields: &[FieldSpec],
) -> AppResult<()> {
    let mut seen_elements = HashSet::new();
    let elements = path_params
        .iter()
        .map(PathParam::element_id)
        .chain(fields.iter().map(FieldSpec::element_id));

    for element_id in elements {
        if !seen_elements.insert(element_id) {
            return Err(AppError::Validation(format!(
                "duplicate form element '{element_id}'"
            )));
        }
    }

    let mut seen_keys = HashSet::new();
    for field in fields {
        if !seen_keys.insert(field.json_key()) {
            return Err(AppError::Validation(format!(
                "duplicate JSON key '{}'",
                field.json_key()
            )));
        }
    }

    Ok(())
}
