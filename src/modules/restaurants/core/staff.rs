use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Cashier,
    Cook,
    Waiter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    /// Subject id of the account at the identity provider.
    pub identity_id: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
