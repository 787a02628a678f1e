use crate::shared::infrastructure::identity_provider::{Identity, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestaurantStatus {
    #[default]
    PendingApproval,
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub status: RestaurantStatus,
    pub is_open: bool,
    pub logo_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Which restaurants a caller may see and manage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    Owner(String),
    Any,
}

impl AccessScope {
    pub fn from_identity(identity: &Identity) -> Self {
        match identity.role {
            UserRole::SuperAdmin => AccessScope::Any,
            _ => AccessScope::Owner(identity.user_id.clone()),
        }
    }

    pub fn allows(&self, restaurant: &Restaurant) -> bool {
        match self {
            AccessScope::Any => true,
            AccessScope::Owner(owner_id) => restaurant.owner_id == *owner_id,
        }
    }
}
