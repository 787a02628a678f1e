use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::restaurants::adapters::inbound::responses::{path_id, reject, reply};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::shared::core::api_response::{ApiResponse, CommonCode};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpeningStatusQuery {
    pub day: i64,
    pub time: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<OpeningStatusQuery>, QueryRejection>,
) -> Response {
    let restaurant_id = match path_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Ok(Query(query)) = query else {
        return ApiResponse::<()>::common(CommonCode::BadRequest).into_response();
    };

    match state
        .opening_status_handler
        .handle(restaurant_id, query.day, &query.time)
        .await
    {
        Ok(status) => reply(StatusCode::OK, RestaurantCode::OpeningStatusFound, status),
        Err(e) => reject(e),
    }
}
