use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};

use profiledesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::form::{FieldSpec, PathParam, ensure_unique_elements};

/// HTTP methods a bound form may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
    /// Partially update a resource.
    Put,
}

impl HttpMethod {
    /// Returns the wire name of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// Returns whether requests with this method carry a JSON body.
    #[must_use]
    pub fn sends_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl Display for HttpMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TemplateSegment {
    Literal(String),
    Placeholder(String),
}

/// Resource path template with whole-segment `{param}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTemplate {
    raw: String,
    segments: Vec<TemplateSegment>,
}

impl UrlTemplate {
    /// Parses a template such as `/v1/profiles/user/{userId}/tenant/{tenantId}`.
    pub fn parse(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        let Some(path) = raw.strip_prefix('/') else {
            return Err(AppError::Validation(format!(
                "url template '{raw}' must start with '/'"
            )));
        };

        let mut placeholders = HashSet::new();
        let mut segments = Vec::new();
        for segment in path.split('/') {
            if segment.is_empty() {
                return Err(AppError::Validation(format!(
                    "url template '{raw}' contains an empty segment"
                )));
            }

            if let Some(name) = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                if name.trim().is_empty() || name.contains(['{', '}']) {
                    return Err(AppError::Validation(format!(
                        "url template '{raw}' has an invalid placeholder '{segment}'"
                    )));
                }
                if !placeholders.insert(name.to_owned()) {
                    return Err(AppError::Validation(format!(
                        "url template '{raw}' repeats placeholder '{name}'"
                    )));
                }
                segments.push(TemplateSegment::Placeholder(name.to_owned()));
            } else if segment.contains(['{', '}']) {
                return Err(AppError::Validation(format!(
                    "url template '{raw}' placeholders must span a whole segment"
                )));
            } else {
                segments.push(TemplateSegment::Literal(segment.to_owned()));
            }
        }

        Ok(Self { raw, segments })
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// Returns placeholder names in path order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Placeholder(name) => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }

    /// Substitutes every placeholder. Unused parameters are ignored.
    pub fn expand(&self, params: &BTreeMap<String, String>) -> AppResult<ResourcePath> {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                TemplateSegment::Literal(value) => Ok(value.clone()),
                TemplateSegment::Placeholder(name) => params
                    .get(name)
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| value.trim().to_owned())
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "missing path parameter '{name}' for '{}'",
                            self.raw
                        ))
                    }),
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ResourcePath { segments })
    }
}

/// An expanded resource path. Segments are unencoded; transports encode them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Returns raw path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for ResourcePath {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(formatter, "/{segment}")?;
        }
        Ok(())
    }
}

/// One labelled value of a detail or list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    /// JSON key read from the response object.
    pub json_key: String,
    /// Column or row label.
    pub label: String,
}

impl DisplayField {
    /// Creates a display field.
    #[must_use]
    pub fn new(json_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            json_key: json_key.into(),
            label: label.into(),
        }
    }
}

/// Per-row form in a list view that submits another bound form with the row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    /// Form submitted by the row button.
    pub form_id: String,
    /// Element of that form receiving the row's `id`.
    pub element_id: String,
    /// Button caption.
    pub label: String,
}

/// Copies a submitted value into the populated target form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryOver {
    /// Element read from the submitted form.
    pub from_element: String,
    /// Element written in the target form.
    pub to_element: String,
}

/// What a successful response renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "view")]
pub enum SuccessView {
    /// Success notification, `{key}` placeholders filled from the response.
    Notify {
        /// Message template.
        message: String,
        /// Clears the submitted form afterwards.
        reset_form: bool,
    },
    /// Labelled detail view of a response object.
    Detail {
        /// Displayed keys.
        fields: Vec<DisplayField>,
    },
    /// Table of a response array.
    List {
        /// Displayed columns.
        fields: Vec<DisplayField>,
        /// Optional per-row action.
        row_action: Option<RowAction>,
    },
    /// Lookup-then-edit: fills another bound form with the response.
    PopulateForm {
        /// Form receiving the response values.
        target_form: String,
        /// Submitted values copied into the target.
        carry_over: Vec<CarryOver>,
        /// Success notification message.
        message: String,
    },
}

/// Declarative binding of one form to one REST call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAction {
    name: NonEmptyString,
    method: HttpMethod,
    url_template: UrlTemplate,
    path_params: Vec<PathParam>,
    fields: Vec<FieldSpec>,
    on_success: SuccessView,
    failure_message: NonEmptyString,
}

impl ResourceAction {
    /// Creates a validated resource action.
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        url_template: UrlTemplate,
        path_params: Vec<PathParam>,
        fields: Vec<FieldSpec>,
        on_success: SuccessView,
        failure_message: impl Into<String>,
    ) -> AppResult<Self> {
        let name = NonEmptyString::new(name)?;

        if !method.sends_body() && !fields.is_empty() {
            return Err(AppError::Validation(format!(
                "action '{name}' uses {method} and cannot declare body fields"
            )));
        }

        ensure_unique_elements(&path_params, &fields)?;

        let placeholders: HashSet<&str> = url_template.placeholders().collect();
        let bound: HashSet<&str> = path_params.iter().map(PathParam::name).collect();
        if placeholders != bound {
            return Err(AppError::Validation(format!(
                "action '{name}' must bind exactly the placeholders of '{}'",
                url_template.as_str()
            )));
        }

        Ok(Self {
            name,
            method,
            url_template,
            path_params,
            fields,
            on_success,
            failure_message: NonEmptyString::new(failure_message)?,
        })
    }

    /// Returns the action name used in traces.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the URL template.
    #[must_use]
    pub fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    /// Returns path parameter bindings.
    #[must_use]
    pub fn path_params(&self) -> &[PathParam] {
        &self.path_params
    }

    /// Returns body field bindings.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the success view.
    #[must_use]
    pub fn on_success(&self) -> &SuccessView {
        &self.on_success
    }

    /// Returns the fixed failure message.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        self.failure_message.as_str()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use crate::form::{FieldKind, FieldSpec, PathParam};

    use super::{HttpMethod, ResourceAction, SuccessView, UrlTemplate};

    fn notify() -> SuccessView {
        SuccessView::Notify {
            message: "done".to_owned(),
            reset_form: false,
        }
    }

    #[test]
    fn template_expands_placeholders_in_order() {
        let template = UrlTemplate::parse("/v1/profiles/user/{userId}/tenant/{tenantId}")
            .unwrap_or_else(|_| unreachable!());
        let params = BTreeMap::from([
            ("tenantId".to_owned(), "t-1".to_owned()),
            ("userId".to_owned(), "u-1".to_owned()),
        ]);

        let path = template.expand(&params).unwrap_or_else(|_| unreachable!());
        assert_eq!(path.to_string(), "/v1/profiles/user/u-1/tenant/t-1");
        assert_eq!(
            template.placeholders().collect::<Vec<_>>(),
            vec!["userId", "tenantId"]
        );
    }

    #[test]
    fn template_rejects_missing_parameter() {
        let template = UrlTemplate::parse("/v1/tenants/{id}").unwrap_or_else(|_| unreachable!());
        assert!(template.expand(&BTreeMap::new()).is_err());
    }

    #[test]
    fn template_rejects_partial_segment_placeholder() {
        assert!(UrlTemplate::parse("/v1/tenants/id-{id}").is_err());
        assert!(UrlTemplate::parse("v1/tenants").is_err());
        assert!(UrlTemplate::parse("/v1//tenants").is_err());
        assert!(UrlTemplate::parse("/v1/{id}/{id}").is_err());
    }

    #[test]
    fn path_segments_keep_reserved_characters_unencoded() {
        let template = UrlTemplate::parse("/v1/users/{id}").unwrap_or_else(|_| unreachable!());
        let params = BTreeMap::from([("id".to_owned(), "a/b".to_owned())]);
        let path = template.expand(&params).unwrap_or_else(|_| unreachable!());
        assert_eq!(path.segments(), ["v1", "users", "a/b"]);
    }

    #[test]
    fn get_actions_cannot_declare_body_fields() {
        let action = ResourceAction::new(
            "lookup tenant",
            HttpMethod::Get,
            UrlTemplate::parse("/v1/tenants").unwrap_or_else(|_| unreachable!()),
            Vec::new(),
            vec![
                FieldSpec::new("tenantName", "name", "Name", FieldKind::Text)
                    .unwrap_or_else(|_| unreachable!()),
            ],
            notify(),
            "Error fetching tenant",
        );

        assert!(action.is_err());
    }

    #[test]
    fn every_placeholder_needs_a_path_param() {
        let action = ResourceAction::new(
            "modify tenant",
            HttpMethod::Put,
            UrlTemplate::parse("/v1/tenants/{id}").unwrap_or_else(|_| unreachable!()),
            Vec::new(),
            Vec::new(),
            notify(),
            "Error updating tenant",
        );
        assert!(action.is_err());

        let action = ResourceAction::new(
            "modify tenant",
            HttpMethod::Put,
            UrlTemplate::parse("/v1/tenants/{id}").unwrap_or_else(|_| unreachable!()),
            vec![
                PathParam::new("modifyTenantId", "id", "Tenant ID")
                    .unwrap_or_else(|_| unreachable!()),
            ],
            Vec::new(),
            notify(),
            "Error updating tenant",
        );
        assert!(action.is_ok());
    }

    proptest! {
        #[test]
        fn expansion_substitutes_any_non_blank_value(id in "[A-Za-z0-9 /?#%-]{1,24}") {
            prop_assume!(!id.trim().is_empty());
            let template = UrlTemplate::parse("/v1/tenants/{id}").unwrap_or_else(|_| unreachable!());
            let params = BTreeMap::from([("id".to_owned(), id.clone())]);
            let path = template.expand(&params).unwrap_or_else(|_| unreachable!());
            prop_assert_eq!(path.segments().len(), 3);
            prop_assert_eq!(path.segments()[2].as_str(), id.trim());
        }
    }

    #[test]
    fn method_displays_and_serializes_as_wire_name() {
        for method in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put] {
            assert_eq!(method.to_string(), method.as_str());
            assert_eq!(
                serde_json::to_value(method).ok(),
                Some(serde_json::Value::String(method.as_str().to_owned()))
            );
        }
    }
}
