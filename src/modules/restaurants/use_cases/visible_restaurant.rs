use crate::modules::restaurants::adapters::outbound::restaurant_store::RestaurantRepository;
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::{AccessScope, Restaurant};
use uuid::Uuid;

/// Loads a restaurant the caller may manage. Foreign restaurants are reported as missing.
pub async fn load_visible_restaurant<TRestaurants>(
    restaurants: &TRestaurants,
    restaurant_id: Uuid,
    scope: &AccessScope,
) -> Result<Restaurant, ApplicationError>
where
    TRestaurants: RestaurantRepository + ?Sized,
{
    restaurants
        .find_by_id(restaurant_id)
        .await?
        .filter(|restaurant| scope.allows(restaurant))
        .ok_or(ApplicationError::Domain(RestaurantError::RestaurantNotFound(
            restaurant_id,
        )))
}
