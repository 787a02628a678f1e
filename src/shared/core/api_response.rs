// Response envelope shared by every REST endpoint.
//
// Shape
// - { success, code, message, httpCode, data }, and the HTTP status always equals httpCode.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Codes that do not belong to a bounded context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonCode {
    BadRequest,
    ValidationError,
    AccessTokenRequired,
    InvalidAccessToken,
    Forbidden,
    InternalError,
}

impl CommonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            CommonCode::BadRequest => "BAD_REQUEST",
            CommonCode::ValidationError => "VALIDATION_ERROR",
            CommonCode::AccessTokenRequired => "ACCESS_TOKEN_REQUIRED",
            CommonCode::InvalidAccessToken => "INVALID_ACCESS_TOKEN",
            CommonCode::Forbidden => "FORBIDDEN",
            CommonCode::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CommonCode::BadRequest => "Bad request",
            CommonCode::ValidationError => "Validation error",
            CommonCode::AccessTokenRequired => "Access token is required",
            CommonCode::InvalidAccessToken => "Access token is invalid or expired",
            CommonCode::Forbidden => "You are not allowed to access this resource",
            CommonCode::InternalError => "Internal server error",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            CommonCode::BadRequest => StatusCode::UNPROCESSABLE_ENTITY,
            CommonCode::ValidationError => StatusCode::BAD_REQUEST,
            CommonCode::AccessTokenRequired | CommonCode::InvalidAccessToken => {
                StatusCode::UNAUTHORIZED
            }
            CommonCode::Forbidden => StatusCode::FORBIDDEN,
            CommonCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    pub http_code: u16,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, code: &str, message: &str, data: T) -> Self {
        Self {
            success: true,
            code: code.to_string(),
            message: message.to_string(),
            http_code: status.as_u16(),
            data: Some(data),
        }
    }

    pub fn failure(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.into(),
            http_code: status.as_u16(),
            data: None,
        }
    }

    /// A failure that still carries a payload, as empty listings do.
    pub fn failure_with(status: StatusCode, code: &str, message: &str, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::failure(status, code, message)
        }
    }

    pub fn common(code: CommonCode) -> Self {
        Self::failure(code.status(), code.as_str(), code.message())
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.http_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
