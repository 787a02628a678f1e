use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RepositoryError, RestaurantRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::{AccessScope, Restaurant};
use crate::modules::restaurants::use_cases::update_restaurant::command::UpdateRestaurant;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;

pub struct UpdateRestaurantHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
}

impl<TRestaurants> UpdateRestaurantHandler<TRestaurants>
where
    TRestaurants: RestaurantRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(
        &self,
        scope: &AccessScope,
        command: UpdateRestaurant,
    ) -> Result<Restaurant, ApplicationError> {
        let current =
            load_visible_restaurant(&*self.restaurants, command.restaurant_id, scope).await?;

        if let Some(name) = command.name.as_deref().filter(|name| *name != current.name) {
            let taken = self
                .restaurants
                .find_by_owner_and_name(&current.owner_id, name)
                .await?;
            if taken.is_some() {
                return Err(RestaurantError::RestaurantAlreadyExists(name.to_string()).into());
            }
        }

        let updated = Restaurant {
            name: command.name.unwrap_or(current.name),
            address: command.address.unwrap_or(current.address),
            is_open: command.is_open.unwrap_or(current.is_open),
            status: command.status.unwrap_or(current.status),
            updated_at: command.requested_at,
            ..current
        };

        match self.restaurants.update(updated.clone()).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(_)) => {
                return Err(RestaurantError::RestaurantAlreadyExists(updated.name).into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(restaurant_id = %updated.id, "restaurant updated");
        Ok(updated)
    }
}
