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
    path_id, reject, reply, validated_body,
};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::use_cases::create_table::command::CreateTable;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

fn available_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableBody {
    #[validate(range(min = 1))]
    pub table_number: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub seating_capacity: u32,
    #[serde(default = "available_by_default")]
    pub is_available: bool,
    #[validate(length(max = 120))]
    #[serde(default)]
    pub location: String,
}

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<CreateTableBody>, JsonRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match validated_body(body) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let command = CreateTable {
        restaurant_id,
        table_number: body.table_number,
        seating_capacity: body.seating_capacity,
        is_available: body.is_available,
        location: body.location,
    };

    match state
        .create_table_handler
        .handle(&AccessScope::from_identity(&identity), command)
        .await
    {
        Ok(table) => reply(
            StatusCode::CREATED,
            RestaurantCode::RestaurantTableCreated,
            table,
        ),
        Err(e) => reject(e),
    }
}
