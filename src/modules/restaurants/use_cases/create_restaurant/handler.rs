use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RepositoryError, RestaurantRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::modules::restaurants::use_cases::create_restaurant::command::CreateRestaurant;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateRestaurantHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
}

impl<TRestaurants> CreateRestaurantHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, command: CreateRestaurant) -> Result<Restaurant, ApplicationError> {
        let taken = self
            .restaurants
            .find_by_owner_and_name(&command.owner_id, &command.name)
            .await?;
        if taken.is_some() {
            return Err(RestaurantError::RestaurantAlreadyExists(command.name).into());
        }

        let restaurant = Restaurant {
            id: Uuid::now_v7(),
            owner_id: command.owner_id,
            name: command.name,
            address: command.address,
            status: command.status.unwrap_or_default(),
            is_open: command.is_open,
            logo_url: None,
            created_at: command.requested_at,
            updated_at: command.requested_at,
        };

        match self.restaurants.insert(restaurant.clone()).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(_)) => {
                return Err(RestaurantError::RestaurantAlreadyExists(restaurant.name).into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(restaurant_id = %restaurant.id, owner_id = %restaurant.owner_id, "restaurant created");
        Ok(restaurant)
    }
}
