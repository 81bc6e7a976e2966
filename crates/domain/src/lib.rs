//! Domain types of the resource form binder.

#![forbid(unsafe_code)]

mod action;
mod form;
mod notification;
mod option_set;
mod view_model;

pub use action::{
    CarryOver, DisplayField, HttpMethod, ResourceAction, ResourcePath, RowAction, SuccessView,
    UrlTemplate,
};
pub use form::{FieldKind, FieldSpec, PathParam};
pub use notification::{
    Notification, NotificationLevel, SubmissionResult, display_value, fill_template,
};
pub use option_set::{
    SubscriptionPlanType, TenantStatus, TenantType, TenantUserRole, UserState, option_values,
};
pub use view_model::{FormValue, FormViewModel};
