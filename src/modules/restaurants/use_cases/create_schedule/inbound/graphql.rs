use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::restaurants::adapters::inbound::responses::graphql_error;
use crate::modules::restaurants::use_cases::create_schedule::command::CreateSchedule;
use crate::modules::restaurants::use_cases::list_schedules::inbound::graphql::ScheduleNode;
use crate::shared::core::day_of_week::DayOfWeek;
use crate::shell::graphql::{parse_id, require_manager};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateScheduleMutation;

#[Object]
impl CreateScheduleMutation {
    async fn create_schedule(
        &self,
        context: &Context<'_>,
        restaurant_id: ID,
        day_of_week: i32,
        open_time: String,
        close_time: String,
    ) -> GqlResult<ScheduleNode> {
        let state = context.data_unchecked::<AppState>();
        let scope = require_manager(context)?;

        let command = CreateSchedule {
            restaurant_id: parse_id(&restaurant_id)?,
            day_of_week: DayOfWeek::try_from(i64::from(day_of_week))?,
            open_time,
            close_time,
        };

        state
            .create_schedule_handler
            .handle(&scope, command)
            .await
            .map(ScheduleNode::from)
            .map_err(graphql_error)
    }
}
