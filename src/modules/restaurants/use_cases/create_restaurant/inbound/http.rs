use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::modules::restaurants::adapters::inbound::responses::{reject, reply, validated_body};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::modules::restaurants::core::restaurant::RestaurantStatus;
use crate::modules::restaurants::use_cases::create_restaurant::command::CreateRestaurant;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantBody {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[serde(default)]
    pub is_open: bool,
    pub status: Option<RestaurantStatus>,
}

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
    body: Result<Json<CreateRestaurantBody>, JsonRejection>,
) -> Response {
    let body = match validated_body(body) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let command = CreateRestaurant {
        owner_id: identity.user_id,
        name: body.name,
        address: body.address,
        is_open: body.is_open,
        status: body.status,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.create_restaurant_handler.handle(command).await {
        Ok(restaurant) => reply(
            StatusCode::CREATED,
            RestaurantCode::RestaurantCreated,
            restaurant,
        ),
        Err(e) => reject(e),
    }
}

#[cfg(test)]
mod create_restaurant_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{json_of, json_request};
    use crate::tests::fixtures::identities::TENANT_TOKEN;
    use crate::tests::fixtures::state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/restaurants", post(handle))
            .with_state(state)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_201_owned_by_the_caller() {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let response = app(make_test_state(store).await)
            .oneshot(json_request(
                "POST",
                "/restaurants",
                Some(TENANT_TOKEN),
                r#"{"name":"Trattoria Nonna","address":"Calle Mayor 12"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_of(response).await;
        assert_eq!(json["code"], "RESTAURANT_CREATED");
        assert_eq!(json["data"]["ownerId"], "tenant-0001");
        assert_eq!(json["data"]["status"], "PENDING_APPROVAL");
        assert_eq!(json["data"]["isOpen"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_409_for_a_second_restaurant_with_the_same_name() {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let router = app(make_test_state(store).await);
        let body = r#"{"name":"Trattoria Nonna","address":"Calle Mayor 12"}"#;

        let first = router
            .clone()
            .oneshot(json_request("POST", "/restaurants", Some(TENANT_TOKEN), body))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = router
            .oneshot(json_request("POST", "/restaurants", Some(TENANT_TOKEN), body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(json_of(second).await["code"], "RESTAURANT_ALREADY_EXISTS");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_when_the_name_is_empty() {
        let store = Arc::new(InMemoryRestaurantStore::new());
        let response = app(make_test_state(store).await)
            .oneshot(json_request(
                "POST",
                "/restaurants",
                Some(TENANT_TOKEN),
                r#"{"name":"","address":"Calle Mayor 12"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["code"], "VALIDATION_ERROR");
    }
}
