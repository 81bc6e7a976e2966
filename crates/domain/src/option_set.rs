//! Enumerations accepted by the profile backend, used as choice options.
//!
//! The binder never validates against these; they only populate selects.

use serde::{Deserialize, Serialize};

/// Kind of tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantType {
    /// Single-user tenant.
    Person,
    /// Multi-user tenant.
    Organization,
}

impl TenantType {
    /// Every tenant type in display order.
    pub const ALL: [Self; 2] = [Self::Person, Self::Organization];

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
        }
    }
}

/// Lifecycle status of a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    /// Tenant is usable.
    Active,
    /// Tenant is temporarily blocked.
    Suspended,
    /// Tenant is retired.
    Inactive,
}

impl TenantStatus {
    /// Every tenant status in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Suspended, Self::Inactive];

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Subscription plan of a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlanType {
    /// Free tier.
    Free,
    /// Basic tier.
    Basic,
    /// Professional tier.
    Professional,
    /// Enterprise tier.
    Enterprise,
}

impl SubscriptionPlanType {
    /// Every plan in display order.
    pub const ALL: [Self; 4] = [
        Self::Free,
        Self::Basic,
        Self::Professional,
        Self::Enterprise,
    ];

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Basic => "BASIC",
            Self::Professional => "PROFESSIONAL",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

/// Account state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    /// User may sign in.
    Active,
    /// User is deactivated.
    Inactive,
}

impl UserState {
    /// Every user state in display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Role of a user within a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantUserRole {
    /// Manages every aspect of a tenant.
    TenantAdmin,
    /// Manages a tenant except critical settings.
    TenantManager,
    /// Regular member.
    TenantUser,
    /// Cross-tenant administrator.
    SystemAdmin,
}

impl TenantUserRole {
    /// Every role in display order.
    pub const ALL: [Self; 4] = [
        Self::TenantAdmin,
        Self::TenantManager,
        Self::TenantUser,
        Self::SystemAdmin,
    ];

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenantAdmin => "TENANT_ADMIN",
            Self::TenantManager => "TENANT_MANAGER",
            Self::TenantUser => "TENANT_USER",
            Self::SystemAdmin => "SYSTEM_ADMIN",
        }
    }
}

/// Collects wire values into a choice option list.
#[must_use]
pub fn option_values<T: Copy>(values: &[T], as_str: fn(&T) -> &'static str) -> Vec<String> {
    values.iter().map(|value| as_str(value).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::{SubscriptionPlanType, TenantUserRole, option_values};

    #[test]
    fn option_values_keep_declaration_order() {
        assert_eq!(
            option_values(&SubscriptionPlanType::ALL, SubscriptionPlanType::as_str),
            vec!["FREE", "BASIC", "PROFESSIONAL", "ENTERPRISE"]
        );
    }

    #[test]
    fn roles_serialize_as_wire_values() {
        for role in TenantUserRole::ALL {
            assert_eq!(
                serde_json::to_value(role).ok(),
                Some(serde_json::Value::String(role.as_str().to_owned()))
            );
        }
    }
}
