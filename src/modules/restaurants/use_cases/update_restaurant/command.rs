use crate::modules::restaurants::core::restaurant::RestaurantStatus;
use uuid::Uuid;

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRestaurant {
    pub restaurant_id: Uuid,
    pub name: Option<String>,
    pub address: Option<String>,
    pub is_open: Option<bool>,
    pub status: Option<RestaurantStatus>,
    pub requested_at: i64,
}
