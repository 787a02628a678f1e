// Public lookup answering whether a restaurant is open at a given weekday and time.
//
// Responsibilities
// - Consider the schedules of the asked day and the wrapping schedules of the day before,
//   whose early-morning tail reaches into the asked day.

use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RestaurantRepository, ScheduleRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::schedule::{RestaurantSchedule, is_open_at};
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use crate::shared::core::day_of_week::DayOfWeek;
use crate::shared::core::time_of_day::TimeOfDay;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningStatus {
    pub restaurant_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub time: TimeOfDay,
    pub is_open: bool,
}

pub struct CheckOpeningStatusHandler<TRestaurants, TSchedules>
where
    TRestaurants: RestaurantRepository + 'static,
    TSchedules: ScheduleRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    schedules: Arc<TSchedules>,
}

impl<TRestaurants, TSchedules> CheckOpeningStatusHandler<TRestaurants, TSchedules>
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
        restaurant_id: Uuid,
        day_of_week: i64,
        time: &str,
    ) -> Result<OpeningStatus, ApplicationError> {
        let day_of_week = DayOfWeek::try_from(day_of_week)
            .map_err(|e| RestaurantError::InvalidScheduleFormat(e.to_string()))?;
        let time = TimeOfDay::parse(time)
            .map_err(|e| RestaurantError::InvalidScheduleFormat(e.to_string()))?;

        load_visible_restaurant(&*self.restaurants, restaurant_id, &AccessScope::Any).await?;

        let today = self.schedules.load_day(restaurant_id, day_of_week).await?;
        let yesterday = self
            .schedules
            .load_day(restaurant_id, day_of_week.previous())
            .await?;
        let slots: Vec<_> = today
            .schedules
            .iter()
            .chain(yesterday.schedules.iter())
            .map(RestaurantSchedule::slot)
            .collect();

        Ok(OpeningStatus {
            restaurant_id,
            day_of_week,
            time,
            is_open: is_open_at(&slots, day_of_week, time),
        })
    }
}
