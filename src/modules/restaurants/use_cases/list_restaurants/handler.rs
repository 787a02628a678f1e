use crate::modules::restaurants::adapters::outbound::restaurant_store::RestaurantRepository;
use crate::modules::restaurants::core::errors::ApplicationError;
use crate::modules::restaurants::core::restaurant::Restaurant;
use std::sync::Arc;

pub struct ListRestaurantsHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
}

impl<TRestaurants> ListRestaurantsHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, owner_id: &str) -> Result<Vec<Restaurant>, ApplicationError> {
        let mut restaurants = self.restaurants.list_by_owner(owner_id).await?;
        restaurants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(restaurants)
    }
}
