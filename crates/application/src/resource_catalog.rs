//! Declarative table of every console form and the REST call it triggers.

use std::sync::Arc;

use profiledesk_core::AppResult;
use profiledesk_domain::{
    CarryOver, DisplayField, FieldKind, FieldSpec, HttpMethod, PathParam, ResourceAction,
    RowAction, SubscriptionPlanType, SuccessView, TenantStatus, TenantType, TenantUserRole,
    UrlTemplate, UserState, option_values,
};

use crate::binder_ports::ResourceTransport;
use crate::form_binder::FormBinder;

/// Form creating a tenant.
pub const CREATE_TENANT_FORM: &str = "create-tenant-form";
/// Form loading a tenant into the modify form.
pub const LOOKUP_TENANT_FORM: &str = "lookup-tenant-form";
/// Form partially updating a tenant.
pub const MODIFY_TENANT_FORM: &str = "modify-tenant-form";
/// Form creating a user.
pub const CREATE_USER_FORM: &str = "create-user-form";
/// Form loading a user into the modify form.
pub const LOOKUP_USER_FORM: &str = "lookup-user-form";
/// Form partially updating a user.
pub const MODIFY_USER_FORM: &str = "modify-user-form";
/// Form creating a profile.
pub const CREATE_PROFILE_FORM: &str = "create-profile-form";
/// Form showing one profile by id.
pub const VIEW_PROFILE_FORM: &str = "view-profile-form";
/// Form showing the profile of a user within a tenant.
pub const VIEW_PROFILE_BY_USER_TENANT_FORM: &str = "view-profile-by-user-tenant-form";
/// Form listing the profiles of a tenant.
pub const LIST_PROFILES_FORM: &str = "list-profiles-form";
/// Form loading a profile into the modify form.
pub const LOOKUP_PROFILE_FORM: &str = "lookup-profile-form";
/// Form partially updating a profile.
pub const MODIFY_PROFILE_FORM: &str = "modify-profile-form";
/// Form creating a tenant-user association.
pub const CREATE_TENANT_USER_FORM: &str = "create-tenant-user-form";
/// Form replacing the roles of a tenant-user association.
pub const MODIFY_TENANT_USER_FORM: &str = "modify-tenant-user-form";

/// Builds a binder with every console form bound.
pub fn build_form_binder(transport: Arc<dyn ResourceTransport>) -> AppResult<FormBinder> {
    let mut binder = FormBinder::new(transport);
    for (form_id, action) in standard_actions()? {
        binder.bind(form_id, action)?;
    }
    binder.ensure_links_bound()?;

    Ok(binder)
}

/// Returns every form id and its action, in page order.
pub fn standard_actions() -> AppResult<Vec<(&'static str, ResourceAction)>> {
    let mut actions = tenant_actions()?;
    actions.extend(user_actions()?);
    actions.extend(profile_actions()?);
    actions.extend(tenant_user_actions()?);
    Ok(actions)
}

fn tenant_actions() -> AppResult<Vec<(&'static str, ResourceAction)>> {
    let statuses = option_values(&TenantStatus::ALL, TenantStatus::as_str);
    let plans = option_values(&SubscriptionPlanType::ALL, SubscriptionPlanType::as_str);

    Ok(vec![
        (
            CREATE_TENANT_FORM,
            ResourceAction::new(
                "create tenant",
                HttpMethod::Post,
                UrlTemplate::parse("/v1/tenants")?,
                Vec::new(),
                vec![
                    FieldSpec::new("tenantName", "name", "Tenant name", FieldKind::Text)?
                        .required(),
                    FieldSpec::new(
                        "tenantDescription",
                        "description",
                        "Description",
                        FieldKind::LongText,
                    )?,
                    FieldSpec::new(
                        "tenantType",
                        "tenantType",
                        "Tenant type",
                        FieldKind::Choice(option_values(&TenantType::ALL, TenantType::as_str)),
                    )?
                    .required(),
                    FieldSpec::new(
                        "tenantStatus",
                        "status",
                        "Status",
                        FieldKind::Choice(statuses.clone()),
                    )?,
                    FieldSpec::new(
                        "subscriptionPlanType",
                        "subscriptionPlanType",
                        "Subscription plan",
                        FieldKind::Choice(plans.clone()),
                    )?,
                ],
                created("Tenant"),
                "Error creating tenant.",
            )?,
        ),
        (
            LOOKUP_TENANT_FORM,
            lookup(
                "tenant",
                "/v1/tenants/{id}",
                ("lookupTenantId", "Tenant ID"),
                MODIFY_TENANT_FORM,
                "modifyTenantId",
                "Tenant found! You can now modify its details.",
            )?,
        ),
        (
            MODIFY_TENANT_FORM,
            ResourceAction::new(
                "modify tenant",
                HttpMethod::Put,
                UrlTemplate::parse("/v1/tenants/{id}")?,
                vec![PathParam::new("modifyTenantId", "id", "Tenant ID")?],
                vec![
                    partial("modifyTenantName", "name", "Tenant name", FieldKind::Text)?,
                    partial(
                        "modifyTenantDescription",
                        "description",
                        "Description",
                        FieldKind::LongText,
                    )?,
                    partial(
                        "modifyTenantStatus",
                        "status",
                        "Status",
                        FieldKind::Choice(statuses),
                    )?,
                    partial(
                        "modifySubscriptionPlanType",
                        "subscriptionPlanType",
                        "Subscription plan",
                        FieldKind::Choice(plans),
                    )?,
                ],
                updated("Tenant updated successfully!"),
                "Error updating tenant.",
            )?,
        ),
    ])
}

fn user_actions() -> AppResult<Vec<(&'static str, ResourceAction)>> {
    Ok(vec![
        (
            CREATE_USER_FORM,
            ResourceAction::new(
                "create user",
                HttpMethod::Post,
                UrlTemplate::parse("/v1/users")?,
                Vec::new(),
                vec![
                    FieldSpec::new("userTenantId", "tenantId", "Tenant ID", FieldKind::Text)?
                        .required(),
                    FieldSpec::new("userName", "name", "Name", FieldKind::Text)?.required(),
                    FieldSpec::new("userEmail", "email", "Email", FieldKind::Text)?.required(),
                    FieldSpec::new(
                        "userContactNumber",
                        "contactNumber",
                        "Contact number",
                        FieldKind::Text,
                    )?
                    .required(),
                ],
                created("User"),
                "Error creating user.",
            )?,
        ),
        (
            LOOKUP_USER_FORM,
            lookup(
                "user",
                "/v1/users/{id}",
                ("lookupUserId", "User ID"),
                MODIFY_USER_FORM,
                "modifyUserId",
                "User found! You can now modify their details.",
            )?,
        ),
        (
            MODIFY_USER_FORM,
            ResourceAction::new(
                "modify user",
                HttpMethod::Put,
                UrlTemplate::parse("/v1/users/{id}")?,
                vec![PathParam::new("modifyUserId", "id", "User ID")?],
                vec![
                    partial("modifyUserName", "name", "Name", FieldKind::Text)?,
                    partial("modifyUserEmail", "email", "Email", FieldKind::Text)?,
                    partial(
                        "modifyUserContactNumber",
                        "contactNumber",
                        "Contact number",
                        FieldKind::Text,
                    )?,
                    partial(
                        "modifyUserState",
                        "state",
                        "State",
                        FieldKind::Choice(option_values(&UserState::ALL, UserState::as_str)),
                    )?,
                ],
                updated("User updated successfully!"),
                "Error updating user.",
            )?,
        ),
    ])
}

/// Optional profile attributes shared by the create and modify forms.
const PROFILE_ATTRIBUTES: [(&str, &str, bool); 8] = [
    ("avatarUrl", "Avatar URL", false),
    ("biography", "Biography", true),
    ("jobTitle", "Job title", false),
    ("department", "Department", false),
    ("location", "Location", false),
    ("linkedInUrl", "LinkedIn URL", false),
    ("twitterUrl", "Twitter URL", false),
    ("gitHubUrl", "GitHub URL", false),
];

fn profile_actions() -> AppResult<Vec<(&'static str, ResourceAction)>> {
    let mut create_fields = vec![
        FieldSpec::new("userId", "userId", "User ID", FieldKind::Text)?.required(),
        FieldSpec::new("tenantId", "tenantId", "Tenant ID", FieldKind::Text)?.required(),
        FieldSpec::new("displayName", "displayName", "Display name", FieldKind::Text)?
            .required(),
    ];
    let mut modify_fields = vec![partial(
        "modifyDisplayName",
        "displayName",
        "Display name",
        FieldKind::Text,
    )?];

    for (json_key, label, long_text) in PROFILE_ATTRIBUTES {
        let kind = if long_text {
            FieldKind::LongText
        } else {
            FieldKind::Text
        };
        create_fields.push(FieldSpec::new(json_key, json_key, label, kind.clone())?);
        modify_fields.push(partial(
            format!("modify{}", capitalized(json_key)),
            json_key,
            label,
            kind,
        )?);
    }

    let detail_fields = profile_detail_fields();

    Ok(vec![
        (
            CREATE_PROFILE_FORM,
            ResourceAction::new(
                "create profile",
                HttpMethod::Post,
                UrlTemplate::parse("/v1/profiles")?,
                Vec::new(),
                create_fields,
                created("Profile"),
                "Error creating profile.",
            )?,
        ),
        (
            VIEW_PROFILE_FORM,
            ResourceAction::new(
                "view profile",
                HttpMethod::Get,
                UrlTemplate::parse("/v1/profiles/{id}")?,
                vec![PathParam::new("profileId", "id", "Profile ID")?],
                Vec::new(),
                SuccessView::Detail {
                    fields: detail_fields.clone(),
                },
                "Error fetching profile.",
            )?,
        ),
        (
            VIEW_PROFILE_BY_USER_TENANT_FORM,
            ResourceAction::new(
                "view profile by user and tenant",
                HttpMethod::Get,
                UrlTemplate::parse("/v1/profiles/user/{userId}/tenant/{tenantId}")?,
                vec![
                    PathParam::new("viewUserId", "userId", "User ID")?,
                    PathParam::new("viewTenantId", "tenantId", "Tenant ID")?,
                ],
                Vec::new(),
                SuccessView::Detail {
                    fields: detail_fields,
                },
                "Error fetching profile.",
            )?,
        ),
        (
            LIST_PROFILES_FORM,
            ResourceAction::new(
                "list tenant profiles",
                HttpMethod::Get,
                UrlTemplate::parse("/v1/profiles/tenant/{tenantId}")?,
                vec![PathParam::new("filterTenantId", "tenantId", "Tenant ID")?],
                Vec::new(),
                SuccessView::List {
                    fields: vec![
                        DisplayField::new("id", "Profile ID"),
                        DisplayField::new("userId", "User ID"),
                        DisplayField::new("displayName", "Display name"),
                        DisplayField::new("jobTitle", "Job title"),
                    ],
                    row_action: Some(RowAction {
                        form_id: VIEW_PROFILE_FORM.to_owned(),
                        element_id: "profileId".to_owned(),
                        label: "View".to_owned(),
                    }),
                },
                "Error fetching profiles.",
            )?,
        ),
        (
            LOOKUP_PROFILE_FORM,
            lookup(
                "profile",
                "/v1/profiles/{id}",
                ("lookupProfileId", "Profile ID"),
                MODIFY_PROFILE_FORM,
                "modifyProfileId",
                "Profile found! You can now modify its details.",
            )?,
        ),
        (
            MODIFY_PROFILE_FORM,
            ResourceAction::new(
                "modify profile",
                HttpMethod::Put,
                UrlTemplate::parse("/v1/profiles/{id}")?,
                vec![PathParam::new("modifyProfileId", "id", "Profile ID")?],
                modify_fields,
                updated("Profile updated successfully!"),
                "Error updating profile.",
            )?,
        ),
    ])
}

fn tenant_user_actions() -> AppResult<Vec<(&'static str, ResourceAction)>> {
    let roles = option_values(&TenantUserRole::ALL, TenantUserRole::as_str);

    Ok(vec![
        (
            CREATE_TENANT_USER_FORM,
            ResourceAction::new(
                "create tenant user",
                HttpMethod::Post,
                UrlTemplate::parse("/v1/tenant-users")?,
                Vec::new(),
                vec![
                    FieldSpec::new("tenantUserUserId", "userId", "User ID", FieldKind::Text)?
                        .required(),
                    FieldSpec::new("tenantUserTenantId", "tenantId", "Tenant ID", FieldKind::Text)?
                        .required(),
                    FieldSpec::new(
                        "tenantUserRoles",
                        "roles",
                        "Roles",
                        FieldKind::MultiChoice(roles.clone()),
                    )?
                    .required(),
                ],
                created("Tenant-user association"),
                "Error creating tenant-user association.",
            )?,
        ),
        (
            MODIFY_TENANT_USER_FORM,
            ResourceAction::new(
                "modify tenant user",
                HttpMethod::Put,
                UrlTemplate::parse("/v1/tenant-users/{id}")?,
                vec![PathParam::new("modifyTenantUserId", "id", "Tenant-user ID")?],
                vec![
                    FieldSpec::new(
                        "modifyTenantUserRoles",
                        "roles",
                        "Roles",
                        FieldKind::MultiChoice(roles),
                    )?
                    .required(),
                ],
                updated("Tenant-user roles updated successfully!"),
                "Error updating tenant-user association.",
            )?,
        ),
    ])
}

fn profile_detail_fields() -> Vec<DisplayField> {
    let mut fields = vec![
        DisplayField::new("id", "Profile ID"),
        DisplayField::new("userId", "User ID"),
        DisplayField::new("tenantId", "Tenant ID"),
        DisplayField::new("displayName", "Display name"),
    ];
    fields.extend(
        PROFILE_ATTRIBUTES
            .iter()
            .map(|(json_key, label, _)| DisplayField::new(*json_key, *label)),
    );
    fields
}

fn partial(
    element_id: impl Into<String>,
    json_key: &str,
    label: &str,
    kind: FieldKind,
) -> AppResult<FieldSpec> {
    Ok(FieldSpec::new(element_id, json_key, label, kind)?.omit_if_empty())
}

fn lookup(
    resource: &str,
    template: &str,
    (element_id, label): (&str, &str),
    target_form: &str,
    target_element: &str,
    message: &str,
) -> AppResult<ResourceAction> {
    ResourceAction::new(
        format!("lookup {resource}"),
        HttpMethod::Get,
        UrlTemplate::parse(template)?,
        vec![PathParam::new(element_id, "id", label)?],
        Vec::new(),
        SuccessView::PopulateForm {
            target_form: target_form.to_owned(),
            carry_over: vec![CarryOver {
                from_element: element_id.to_owned(),
                to_element: target_element.to_owned(),
            }],
            message: message.to_owned(),
        },
        format!("Error fetching {resource}."),
    )
}

fn created(resource: &str) -> SuccessView {
    SuccessView::Notify {
        message: format!("{resource} created successfully with ID: {{id}}"),
        reset_form: true,
    }
}

fn updated(message: &str) -> SuccessView {
    SuccessView::Notify {
        message: message.to_owned(),
        reset_form: false,
    }
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
