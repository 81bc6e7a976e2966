use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current value of one form element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Text input or single selection.
    Single(String),
    /// Multi-selection.
    Many(Vec<String>),
}

impl FormValue {
    /// Returns the value as text. Multi-selections yield their last entry.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Single(value) => value.as_str(),
            Self::Many(values) => values.last().map(String::as_str).unwrap_or(""),
        }
    }

    /// Returns the non-blank selections, verbatim.
    #[must_use]
    pub fn selections(&self) -> Vec<String> {
        match self {
            Self::Single(value) if !value.trim().is_empty() => vec![value.clone()],
            Self::Single(_) => Vec::new(),
            Self::Many(values) => values
                .iter()
                .filter(|value| !value.trim().is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Returns whether the value is blank after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Single(value) => value.trim().is_empty(),
            Self::Many(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }

    /// Returns whether a selection equals `option`.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Self::Single(value) => value == option,
            Self::Many(values) => values.iter().any(|value| value == option),
        }
    }
}

impl Default for FormValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

/// Explicit state of one rendered form.
///
/// Every update returns a new view model; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormViewModel {
    form_id: String,
    values: BTreeMap<String, FormValue>,
    visible: bool,
}

impl FormViewModel {
    /// Creates an empty, visible view model.
    #[must_use]
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            values: BTreeMap::new(),
            visible: true,
        }
    }

    /// Builds a view model from submitted `name=value` pairs.
    ///
    /// A name that occurs more than once becomes a multi-selection.
    #[must_use]
    pub fn from_pairs<I, K, V>(form_id: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: BTreeMap<String, FormValue> = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            let value = value.into();
            let next = match values.remove(&name) {
                None => FormValue::Single(value),
                Some(FormValue::Single(previous)) => FormValue::Many(vec![previous, value]),
                Some(FormValue::Many(mut previous)) => {
                    previous.push(value);
                    FormValue::Many(previous)
                }
            };
            values.insert(name, next);
        }

        Self {
            form_id: form_id.into(),
            values,
            visible: true,
        }
    }

    /// Returns the form identifier.
    #[must_use]
    pub fn form_id(&self) -> &str {
        self.form_id.as_str()
    }

    /// Returns whether the form is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the value of an element, if it was ever set.
    #[must_use]
    pub fn value(&self, element_id: &str) -> Option<&FormValue> {
        self.values.get(element_id)
    }

    /// Returns the text of an element, empty when unset.
    #[must_use]
    pub fn text(&self, element_id: &str) -> &str {
        self.values.get(element_id).map(FormValue::as_text).unwrap_or("")
    }

    /// Returns all element values.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, FormValue> {
        &self.values
    }

    /// Returns a copy with one element set.
    #[must_use]
    pub fn with_value(mut self, element_id: impl Into<String>, value: FormValue) -> Self {
        self.values.insert(element_id.into(), value);
        self
    }

    /// Returns a copy with every value cleared.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            values: BTreeMap::new(),
            ..self
        }
    }

    /// Returns a shown copy.
    #[must_use]
    pub fn shown(self) -> Self {
        Self {
            visible: true,
            ..self
        }
    }

    /// Returns a hidden copy.
    #[must_use]
    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormValue, FormViewModel};

    #[test]
    fn repeated_names_become_multi_selection() {
        let view_model = FormViewModel::from_pairs(
            "create-tenant-user-form",
            [
                ("tenantUserUserId", "u-1"),
                ("tenantUserRoles", "TENANT_ADMIN"),
                ("tenantUserRoles", "TENANT_USER"),
            ],
        );

        assert_eq!(view_model.text("tenantUserUserId"), "u-1");
        assert_eq!(
            view_model.value("tenantUserRoles"),
            Some(&FormValue::Many(vec![
                "TENANT_ADMIN".to_owned(),
                "TENANT_USER".to_owned()
            ]))
        );
    }

    #[test]
    fn updates_return_new_view_models() {
        let original = FormViewModel::new("modify-tenant-form");
        let updated = original
            .clone()
            .with_value("modifyTenantName", FormValue::Single("Acme".to_owned()));

        assert_eq!(original.text("modifyTenantName"), "");
        assert_eq!(updated.text("modifyTenantName"), "Acme");

        let cleared = updated.hidden().reset();
        assert!(!cleared.is_visible());
        assert!(cleared.values().is_empty());
        assert!(cleared.shown().is_visible());
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(FormValue::Single("   ".to_owned()).is_blank());
        assert!(FormValue::Many(vec![" ".to_owned(), String::new()]).is_blank());
        assert!(!FormValue::Many(vec![String::new(), "TENANT_USER".to_owned()]).is_blank());
        assert_eq!(
            FormValue::Many(vec![String::new(), "TENANT_USER".to_owned()]).selections(),
            vec!["TENANT_USER".to_owned()]
        );
    }
}
