use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};
use uuid::Uuid;

use crate::modules::restaurants::adapters::inbound::responses::{path_id, reject, reply_listing};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .list_schedules_handler
        .handle(&AccessScope::from_identity(&identity), restaurant_id)
        .await
    {
        Ok(schedules) => reply_listing(
            schedules,
            RestaurantCode::SchedulesFound,
            RestaurantCode::SchedulesNotFound,
        ),
        Err(e) => reject(e),
    }
}
