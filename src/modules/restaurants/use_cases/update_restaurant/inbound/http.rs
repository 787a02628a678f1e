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
use crate::modules::restaurants::core::restaurant::{AccessScope, RestaurantStatus};
use crate::modules::restaurants::use_cases::update_restaurant::command::UpdateRestaurant;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantBody {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    pub is_open: Option<bool>,
    pub status: Option<RestaurantStatus>,
}

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateRestaurantBody>, JsonRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match validated_body(body) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let command = UpdateRestaurant {
        restaurant_id,
        name: body.name,
        address: body.address,
        is_open: body.is_open,
        status: body.status,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state
        .update_restaurant_handler
        .handle(&AccessScope::from_identity(&identity), command)
        .await
    {
        Ok(restaurant) => reply(StatusCode::OK, RestaurantCode::RestaurantUpdated, restaurant),
        Err(e) => reject(e),
    }
}
