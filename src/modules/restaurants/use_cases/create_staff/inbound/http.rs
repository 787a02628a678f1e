use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::modules::restaurants::adapters::inbound::responses::{
    path_id, reject, reply, validated_body,
};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::staff::StaffRole;
use crate::modules::restaurants::use_cases::create_staff::command::CreateStaff;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffBody {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(length(min = 1, max = 80))]
    pub last_name: String,
    pub role: StaffRole,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<CreateStaffBody>, JsonRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match validated_body(body) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let command = CreateStaff {
        restaurant_id,
        email: body.email,
        password: body.password,
        name: body.name,
        last_name: body.last_name,
        role: body.role,
        is_active: body.is_active,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state
        .create_staff_handler
        .handle(&AccessScope::from_identity(&identity), command)
        .await
    {
        Ok(member) => reply(StatusCode::CREATED, RestaurantCode::StaffCreated, member),
        Err(e) => reject(e),
    }
}
