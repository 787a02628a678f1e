use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RestaurantRepository, ScheduleRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use std::sync::Arc;
use uuid::Uuid;

pub struct DeleteScheduleHandler<TRestaurants, TSchedules>
where
    TRestaurants: RestaurantRepository + 'static,
    TSchedules: ScheduleRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    schedules: Arc<TSchedules>,
}

impl<TRestaurants, TSchedules> DeleteScheduleHandler<TRestaurants, TSchedules>
where
    TRestaurants: RestaurantRepository + 'static,
    TSchedules: ScheduleRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>, schedules: Arc<TSchedules>) -> Self {
        Self {
            restaurants,
            schedules,
        }
    }

    pub async fn handle(
        &self,
        scope: &AccessScope,
        schedule_id: Uuid,
    ) -> Result<RestaurantSchedule, ApplicationError> {
        let not_found = || ApplicationError::Domain(RestaurantError::ScheduleNotFound(schedule_id));

        let schedule = self
            .schedules
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(not_found)?;

        // Schedules of restaurants outside the caller's scope do not exist for them.
        let visible = self
            .restaurants
            .find_by_id(schedule.restaurant_id)
            .await?
            .is_some_and(|restaurant| scope.allows(&restaurant));
        if !visible {
            return Err(not_found());
        }

        let removed = self
            .schedules
            .delete(schedule_id)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(schedule_id = %removed.id, restaurant_id = %removed.restaurant_id, "schedule deleted");
        Ok(removed)
    }
}
