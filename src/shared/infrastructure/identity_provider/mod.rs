// Port to the third-party identity provider that owns user accounts and sessions.
//
// Boundaries
// - Sign-up, sign-in and token refresh flows live with the provider. This crate only
//   verifies access tokens and provisions or removes staff accounts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Tenant,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaffUser {
    pub email: String,
    pub password: String,
    pub first_names: String,
    pub last_names: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("access token is invalid or expired")]
    InvalidToken,

    #[error("user {0} already exists at the identity provider")]
    UserAlreadyExists(String),

    #[error("identity provider refused the request: {0}")]
    Refused(String),

    #[error("user {0} not found at the identity provider")]
    UserNotFound(String),

    #[error("identity provider error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn verify_access_token(&self, token: &str) -> Result<Identity, IdentityError>;

    /// Returns the provider's subject id for the new account.
    async fn create_staff_user(&self, user: NewStaffUser) -> Result<String, IdentityError>;

    async fn delete_user(&self, email: &str) -> Result<(), IdentityError>;
}

pub mod in_memory;
