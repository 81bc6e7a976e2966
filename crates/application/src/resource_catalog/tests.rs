use std::collections::HashSet;

use profiledesk_domain::{FieldKind, HttpMethod, SuccessView};

use super::{
    CREATE_TENANT_USER_FORM, LIST_PROFILES_FORM, LOOKUP_TENANT_FORM, MODIFY_PROFILE_FORM,
    MODIFY_TENANT_FORM, capitalized, standard_actions,
};

#[test]
fn catalog_declares_every_console_form_once() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());

    let form_ids: HashSet<&str> = actions.iter().map(|(form_id, _)| *form_id).collect();
    assert_eq!(actions.len(), 14);
    assert_eq!(form_ids.len(), 14);
}

#[test]
fn modify_forms_use_put_and_omit_empty_fields() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());

    let modify_forms: Vec<_> = actions
        .iter()
        .filter(|(form_id, _)| form_id.starts_with("modify-"))
        .collect();
    assert_eq!(modify_forms.len(), 4);

    for (form_id, action) in modify_forms {
        assert_eq!(action.method(), HttpMethod::Put, "{form_id}");
        assert_eq!(action.path_params().len(), 1, "{form_id}");
        assert!(
            action
                .fields()
                .iter()
                .all(|field| field.is_omitted_if_empty() || field.is_required()),
            "{form_id}"
        );
    }
}

#[test]
fn lookup_tenant_carries_id_into_modify_form() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());
    let lookup = actions
        .iter()
        .find(|(form_id, _)| *form_id == LOOKUP_TENANT_FORM)
        .map(|(_, action)| action);

    let Some(SuccessView::PopulateForm {
        target_form,
        carry_over,
        ..
    }) = lookup.map(|action| action.on_success())
    else {
        panic!("lookup tenant should populate a form");
    };
    assert_eq!(target_form, MODIFY_TENANT_FORM);
    assert_eq!(carry_over[0].from_element, "lookupTenantId");
    assert_eq!(carry_over[0].to_element, "modifyTenantId");
}

#[test]
fn profile_forms_cover_every_attribute() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());
    let modify = actions
        .iter()
        .find(|(form_id, _)| *form_id == MODIFY_PROFILE_FORM)
        .map(|(_, action)| action);

    let element_ids: Vec<&str> = modify
        .map(|action| action.fields().iter().map(|field| field.element_id()).collect())
        .unwrap_or_default();
    assert_eq!(element_ids.len(), 9);
    assert!(element_ids.contains(&"modifyLinkedInUrl"));
    assert!(element_ids.contains(&"modifyGitHubUrl"));
}

#[test]
fn tenant_user_roles_offer_every_role() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());
    let roles = actions
        .iter()
        .find(|(form_id, _)| *form_id == CREATE_TENANT_USER_FORM)
        .and_then(|(_, action)| action.fields().iter().find(|field| field.json_key() == "roles"))
        .map(|field| field.kind().clone());

    assert_eq!(
        roles,
        Some(FieldKind::MultiChoice(vec![
            "TENANT_ADMIN".to_owned(),
            "TENANT_MANAGER".to_owned(),
            "TENANT_USER".to_owned(),
            "SYSTEM_ADMIN".to_owned(),
        ]))
    );
}

#[test]
fn list_profiles_links_rows_to_view_form() {
    let actions = standard_actions();
    assert!(actions.is_ok());
    let actions = actions.unwrap_or_else(|_| unreachable!());
    let list = actions
        .iter()
        .find(|(form_id, _)| *form_id == LIST_PROFILES_FORM)
        .map(|(_, action)| action.on_success());

    assert!(matches!(
        list,
        Some(SuccessView::List {
            row_action: Some(row_action),
            ..
        }) if row_action.element_id == "profileId"
    ));
}

#[test]
fn capitalized_uppercases_first_letter() {
    assert_eq!(capitalized("gitHubUrl"), "GitHubUrl");
    assert_eq!(capitalized(""), "");
}
