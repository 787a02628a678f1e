use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::modules::restaurants::adapters::inbound::responses::{
    path_id, reject, reply, validated_body, validation_failure,
};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::use_cases::create_schedule::command::CreateSchedule;
use crate::shared::core::day_of_week::DayOfWeek;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleBody {
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i64,
    pub open_time: String,
    pub close_time: String,
}

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<CreateScheduleBody>, JsonRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match validated_body(body) {
        Ok(b) => b,
        Err(response) => return response,
    };
    let day_of_week = match DayOfWeek::try_from(body.day_of_week) {
        Ok(day) => day,
        Err(e) => return validation_failure(e.to_string()),
    };

    let command = CreateSchedule {
        restaurant_id,
        day_of_week,
        open_time: body.open_time,
        close_time: body.close_time,
    };

    match state
        .create_schedule_handler
        .handle(&AccessScope::from_identity(&identity), command)
        .await
    {
        Ok(schedule) => reply(StatusCode::CREATED, RestaurantCode::ScheduleCreated, schedule),
        Err(e) => reject(e),
    }
}
