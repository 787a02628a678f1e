// Translation between use case results and the response envelope.
//
// Responsibilities
// - Map ApplicationError onto status and code in one place for REST and GraphQL.
// - Extract JSON bodies and path ids, answering malformed input with the common codes.
// - Log infrastructure failures; clients only ever see INTERNAL_ERROR for them.

use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::shared::core::api_response::{ApiResponse, CommonCode};
use crate::shared::infrastructure::identity_provider::IdentityError;
use async_graphql::ErrorExtensions;
use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

pub fn reply<T: Serialize>(status: StatusCode, code: RestaurantCode, data: T) -> Response {
    ApiResponse::success(status, code.as_str(), code.message(), data).into_response()
}

/// Empty listings answer 404 with an empty array, as clients of this API expect.
pub fn reply_listing<T: Serialize>(
    items: Vec<T>,
    found: RestaurantCode,
    not_found: RestaurantCode,
) -> Response {
    if items.is_empty() {
        return ApiResponse::failure_with(
            StatusCode::NOT_FOUND,
            not_found.as_str(),
            not_found.message(),
            items,
        )
        .into_response();
    }
    reply(StatusCode::OK, found, items)
}

pub fn domain_status(error: &RestaurantError) -> StatusCode {
    match error {
        RestaurantError::InvalidScheduleFormat(_) | RestaurantError::StaffAccountRefused(_) => {
            StatusCode::BAD_REQUEST
        }
        RestaurantError::RestaurantNotFound(_) | RestaurantError::ScheduleNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        RestaurantError::ScheduleOverlap
        | RestaurantError::ScheduleAlreadyExists
        | RestaurantError::RestaurantAlreadyExists(_)
        | RestaurantError::StaffAlreadyExists(_)
        | RestaurantError::RestaurantTableAlreadyExists(_) => StatusCode::CONFLICT,
    }
}

fn envelope(error: ApplicationError) -> ApiResponse<()> {
    match error {
        ApplicationError::Domain(reason) => {
            tracing::debug!(%reason, "request rejected");
            let code = reason.code();
            ApiResponse::failure(domain_status(&reason), code.as_str(), code.message())
        }
        ApplicationError::Identity(IdentityError::InvalidToken) => {
            ApiResponse::common(CommonCode::InvalidAccessToken)
        }
        other => {
            tracing::error!(error = %other, "request failed");
            ApiResponse::common(CommonCode::InternalError)
        }
    }
}

pub fn reject(error: ApplicationError) -> Response {
    envelope(error).into_response()
}

pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    let response = envelope(error);
    async_graphql::Error::new(response.message).extend_with(|_, extensions| {
        extensions.set("code", response.code.clone());
        extensions.set("httpCode", response.http_code);
    })
}

pub fn validation_failure(message: impl Into<String>) -> Response {
    let code = CommonCode::ValidationError;
    ApiResponse::<()>::failure(code.status(), code.as_str(), message).into_response()
}

pub fn validated_body<T: Validate>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable request body");
        ApiResponse::<()>::common(CommonCode::BadRequest).into_response()
    })?;
    body.validate()
        .map_err(|errors| validation_failure(errors.to_string()))?;
    Ok(body)
}

pub fn path_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, Response> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(%rejection, "malformed path id");
        ApiResponse::<()>::common(CommonCode::BadRequest).into_response()
    })
}
