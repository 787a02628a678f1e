use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RepositoryError, RestaurantRepository, ScheduleRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::schedule::{RestaurantSchedule, ScheduleWindow};
use crate::modules::restaurants::use_cases::create_schedule::command::CreateSchedule;
use crate::modules::restaurants::use_cases::create_schedule::decide::decide_create_schedule;
use crate::modules::restaurants::use_cases::create_schedule::decision::Decision;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;
use uuid::Uuid;

/// Attempts per request when another writer changed the same day in between.
const MAX_ATTEMPTS: u32 = 3;

pub struct CreateScheduleHandler<TRestaurants, TSchedules>
where
    TRestaurants: RestaurantRepository + 'static,
    TSchedules: ScheduleRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    schedules: Arc<TSchedules>,
}

impl<TRestaurants, TSchedules> CreateScheduleHandler<TRestaurants, TSchedules>
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
        command: CreateSchedule,
    ) -> Result<RestaurantSchedule, ApplicationError> {
        let window = ScheduleWindow::parse(&command.open_time, &command.close_time)
            .map_err(|e| RestaurantError::InvalidScheduleFormat(e.to_string()))?;

        load_visible_restaurant(&*self.restaurants, command.restaurant_id, scope).await?;

        let candidate = RestaurantSchedule {
            id: Uuid::now_v7(),
            restaurant_id: command.restaurant_id,
            day_of_week: command.day_of_week,
            open_time: window.open_time,
            close_time: window.close_time,
        };

        let mut attempt = 1;
        loop {
            let loaded = self
                .schedules
                .load_day(command.restaurant_id, command.day_of_week)
                .await?;

            let schedule = match decide_create_schedule(&loaded.schedules, candidate.clone()) {
                Decision::Accepted { schedule } => schedule,
                Decision::Rejected { reason } => {
                    return Err(RestaurantError::from(reason).into());
                }
            };

            match self.schedules.append(loaded.version, schedule.clone()).await {
                Ok(()) => {
                    tracing::info!(
                        schedule_id = %schedule.id,
                        restaurant_id = %schedule.restaurant_id,
                        day_of_week = %schedule.day_of_week,
                        "schedule created"
                    );
                    return Ok(schedule);
                }
                Err(RepositoryError::VersionMismatch { expected, actual })
                    if attempt < MAX_ATTEMPTS =>
                {
                    tracing::debug!(expected, actual, attempt, "schedule day changed, deciding again");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
