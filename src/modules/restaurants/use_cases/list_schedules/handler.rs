use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RestaurantRepository, ScheduleRepository,
};
use crate::modules::restaurants::core::errors::ApplicationError;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;
use uuid::Uuid;

pub struct ListSchedulesHandler<TRestaurants, TSchedules>
where
    TRestaurants: RestaurantRepository + 'static,
    TSchedules: ScheduleRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    schedules: Arc<TSchedules>,
}

impl<TRestaurants, TSchedules> ListSchedulesHandler<TRestaurants, TSchedules>
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

    /// Schedules ordered by day of week, then opening time.
    pub async fn handle(
        &self,
        scope: &AccessScope,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantSchedule>, ApplicationError> {
        load_visible_restaurant(&*self.restaurants, restaurant_id, scope).await?;
        let mut schedules = self.schedules.list_by_restaurant(restaurant_id).await?;
        schedules.sort_by_key(|s| (s.day_of_week, s.open_time));
        Ok(schedules)
    }
}
