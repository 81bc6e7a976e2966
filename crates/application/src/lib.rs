//! Application services and ports.

#![forbid(unsafe_code)]

mod binder_ports;
mod form_binder;
mod resource_catalog;

pub use binder_ports::{ResourceRequest, ResourceTransport, TransportResponse};
pub use form_binder::{
    BoundForm, DetailRow, DetailView, EMPTY_UPDATE_MESSAGE, FormBinder, ListRow, ListView,
    LocalValidationFailure, MISSING_VALUE, ResultView, Submission, SubmissionOutcome,
    populate_form, read_submission,
};
pub use resource_catalog::{
    CREATE_PROFILE_FORM, CREATE_TENANT_FORM, CREATE_TENANT_USER_FORM, CREATE_USER_FORM,
    LIST_PROFILES_FORM, LOOKUP_PROFILE_FORM, LOOKUP_TENANT_FORM, LOOKUP_USER_FORM,
    MODIFY_PROFILE_FORM, MODIFY_TENANT_FORM, MODIFY_TENANT_USER_FORM, MODIFY_USER_FORM,
    VIEW_PROFILE_BY_USER_TENANT_FORM, VIEW_PROFILE_FORM, build_form_binder, standard_actions,
};
