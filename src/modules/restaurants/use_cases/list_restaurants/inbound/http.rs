use axum::{extract::State, response::Response};

use crate::modules::restaurants::adapters::inbound::responses::{reject, reply_listing};
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::shell::auth::RestaurantManager;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RestaurantManager(identity): RestaurantManager,
) -> Response {
    match state
        .list_restaurants_handler
        .handle(&identity.user_id)
        .await
    {
        // An empty listing keeps the found code on its 404.
        Ok(restaurants) => reply_listing(
            restaurants,
            RestaurantCode::RestaurantsFound,
            RestaurantCode::RestaurantsFound,
        ),
        Err(e) => reject(e),
    }
}
