use crate::modules::restaurants::core::restaurant::RestaurantStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRestaurant {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub is_open: bool,
    pub status: Option<RestaurantStatus>,
    pub requested_at: i64,
}
