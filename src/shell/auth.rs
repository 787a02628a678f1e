// Bearer authentication for the management routes.
//
// Responsibilities
// - Read `Authorization: Bearer <token>` and verify it with the identity provider.
// - Admit only super admins and tenants as restaurant managers.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};

use crate::shared::core::api_response::{ApiResponse, CommonCode};
use crate::shared::infrastructure::identity_provider::{
    Identity, IdentityError, IdentityProvider, UserRole,
};
use crate::shell::state::AppState;

pub const MANAGER_ROLES: [UserRole; 2] = [UserRole::SuperAdmin, UserRole::Tenant];

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies a token, mapping provider failures onto the common codes.
pub async fn verify(
    identity_provider: &dyn IdentityProvider,
    token: &str,
) -> Result<Identity, CommonCode> {
    match identity_provider.verify_access_token(token).await {
        Ok(identity) => Ok(identity),
        Err(IdentityError::InvalidToken) => {
            tracing::debug!("access token rejected");
            Err(CommonCode::InvalidAccessToken)
        }
        Err(e) => {
            tracing::error!(error = %e, "access token verification failed");
            Err(CommonCode::InternalError)
        }
    }
}

fn rejection(code: CommonCode) -> Response {
    ApiResponse::<()>::common(code).into_response()
}

/// Any caller holding a valid session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(Self(identity.clone()));
        }

        let Some(token) = bearer_token(&parts.headers) else {
            tracing::debug!(uri = %parts.uri, "access token missing");
            return Err(rejection(CommonCode::AccessTokenRequired));
        };

        let identity = verify(&*state.identity_provider, token)
            .await
            .map_err(rejection)?;
        parts.extensions.insert(identity.clone());
        Ok(Self(identity))
    }
}

/// A super admin or a tenant; staff accounts are refused.
#[derive(Debug, Clone)]
pub struct RestaurantManager(pub Identity);

impl FromRequestParts<AppState> for RestaurantManager {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(identity) =
            AuthenticatedUser::from_request_parts(parts, state).await?;
        if !identity.has_any_role(&MANAGER_ROLES) {
            tracing::warn!(user_id = %identity.user_id, role = ?identity.role, "role may not manage restaurants");
            return Err(rejection(CommonCode::Forbidden));
        }
        Ok(Self(identity))
    }
}
