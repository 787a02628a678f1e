use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::restaurants::adapters::inbound::responses::graphql_error;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use crate::shell::graphql::{parse_id, require_manager};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct ScheduleNode {
    pub id: ID,
    pub restaurant_id: ID,
    pub day_of_week: i32,
    pub open_time: String,
    pub close_time: String,
}

impl From<RestaurantSchedule> for ScheduleNode {
    fn from(schedule: RestaurantSchedule) -> Self {
        Self {
            id: ID(schedule.id.to_string()),
            restaurant_id: ID(schedule.restaurant_id.to_string()),
            day_of_week: i32::from(schedule.day_of_week.index()),
            open_time: schedule.open_time.to_string(),
            close_time: schedule.close_time.to_string(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Weekly schedules of a restaurant, ordered by day then opening time.
    async fn schedules(
        &self,
        context: &Context<'_>,
        restaurant_id: ID,
    ) -> GqlResult<Vec<ScheduleNode>> {
        let state = context.data_unchecked::<AppState>();
        let scope = require_manager(context)?;
        let restaurant_id = parse_id(&restaurant_id)?;

        let schedules = state
            .list_schedules_handler
            .handle(&scope, restaurant_id)
            .await
            .map_err(graphql_error)?;
        Ok(schedules.into_iter().map(ScheduleNode::from).collect())
    }
}
