use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::restaurants::adapters::inbound::responses::graphql_error;
use crate::shell::graphql::{parse_id, require_manager};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteScheduleMutation;

#[Object]
impl DeleteScheduleMutation {
    /// Returns the id of the removed schedule.
    async fn delete_schedule(&self, context: &Context<'_>, schedule_id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let scope = require_manager(context)?;

        let removed = state
            .delete_schedule_handler
            .handle(&scope, parse_id(&schedule_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(ID(removed.id.to_string()))
    }
}
