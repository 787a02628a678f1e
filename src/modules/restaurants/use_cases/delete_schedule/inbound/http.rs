use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};
use uuid::Uuid;

use crate::modules::restaurants::adapters::inbound::responses::{path_id, reject, reply};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let schedule_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_schedule_handler
        .handle(&AccessScope::from_identity(&identity), schedule_id)
        .await
    {
        Ok(schedule) => reply(StatusCode::OK, RestaurantCode::ScheduleDeleted, schedule),
        Err(e) => reject(e),
    }
}
