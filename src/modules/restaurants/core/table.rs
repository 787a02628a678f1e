use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: u32,
    pub seating_capacity: u32,
    pub is_available: bool,
    pub location: String,
    /// Guest deep link the printed QR code points to.
    pub qr_code: String,
}

pub fn table_deep_link(frontend_url: &str, restaurant_id: Uuid, table_number: u32) -> String {
    format!("{frontend_url}{restaurant_id}/{table_number}")
}

#[cfg(test)]
mod table_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_guest_deep_link() {
        let restaurant_id = Uuid::nil();
        assert_eq!(
            table_deep_link("http://localhost:4000/", restaurant_id, 3),
            "http://localhost:4000/00000000-0000-0000-0000-000000000000/3"
        );
    }
}
