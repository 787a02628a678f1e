use crate::modules::restaurants::core::staff::StaffRole;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStaff {
    pub restaurant_id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub requested_at: i64,
}
