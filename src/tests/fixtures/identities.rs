use crate::shared::infrastructure::identity_provider::in_memory::InMemoryIdentityProvider;
use crate::shared::infrastructure::identity_provider::{Identity, NewStaffUser, UserRole};

pub const TENANT_TOKEN: &str = "tenant-token";
pub const OTHER_TENANT_TOKEN: &str = "other-tenant-token";
pub const SUPER_ADMIN_TOKEN: &str = "super-admin-token";
pub const STAFF_TOKEN: &str = "staff-token";

pub fn make_tenant_identity() -> Identity {
    Identity {
        user_id: "tenant-0001".to_string(),
        email: "owner@nonna.test".to_string(),
        role: UserRole::Tenant,
    }
}

pub fn make_other_tenant_identity() -> Identity {
    Identity {
        user_id: "tenant-0002".to_string(),
        email: "owner@rival.test".to_string(),
        role: UserRole::Tenant,
    }
}

pub fn make_super_admin_identity() -> Identity {
    Identity {
        user_id: "admin-0001".to_string(),
        email: "admin@platform.test".to_string(),
        role: UserRole::SuperAdmin,
    }
}

pub fn make_staff_identity() -> Identity {
    Identity {
        user_id: "staff-0001".to_string(),
        email: "cook@nonna.test".to_string(),
        role: UserRole::Staff,
    }
}

pub fn make_new_staff_user() -> NewStaffUser {
    NewStaffUser {
        email: "waiter@nonna.test".to_string(),
        password: "S3cure!pass".to_string(),
        first_names: "Lucia".to_string(),
        last_names: "Romero".to_string(),
    }
}

/// Provider with a signed-in session for each fixture identity.
pub async fn make_identity_provider() -> InMemoryIdentityProvider {
    let provider = InMemoryIdentityProvider::new();
    provider
        .issue_token(TENANT_TOKEN, make_tenant_identity())
        .await;
    provider
        .issue_token(OTHER_TENANT_TOKEN, make_other_tenant_identity())
        .await;
    provider
        .issue_token(SUPER_ADMIN_TOKEN, make_super_admin_identity())
        .await;
    provider
        .issue_token(STAFF_TOKEN, make_staff_identity())
        .await;
    provider
}
