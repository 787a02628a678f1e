use axum::{
    Extension, Json, Router,
    extract::State,
    routing::{delete, get, patch, post},
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::modules::restaurants::use_cases::check_opening_status::inbound::http as opening_status_http;
use crate::modules::restaurants::use_cases::create_restaurant::inbound::http as create_restaurant_http;
use crate::modules::restaurants::use_cases::create_schedule::inbound::http as create_schedule_http;
use crate::modules::restaurants::use_cases::create_staff::inbound::http as create_staff_http;
use crate::modules::restaurants::use_cases::create_table::inbound::http as create_table_http;
use crate::modules::restaurants::use_cases::delete_schedule::inbound::http as delete_schedule_http;
use crate::modules::restaurants::use_cases::list_restaurants::inbound::http as list_restaurants_http;
use crate::modules::restaurants::use_cases::list_schedules::inbound::http as list_schedules_http;
use crate::modules::restaurants::use_cases::list_staff::inbound::http as list_staff_http;
use crate::modules::restaurants::use_cases::list_tables::inbound::http as list_tables_http;
use crate::modules::restaurants::use_cases::update_restaurant::inbound::http as update_restaurant_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route(
            "/restaurants",
            post(create_restaurant_http::handle).get(list_restaurants_http::handle),
        )
        .route("/restaurants/{id}", patch(update_restaurant_http::handle))
        .route(
            "/restaurants/{id}/schedules",
            post(create_schedule_http::handle).get(list_schedules_http::handle),
        )
        .route("/schedules/{id}", delete(delete_schedule_http::handle))
        .route(
            "/restaurants/{id}/opening-status",
            get(opening_status_http::handle),
        )
        .route(
            "/restaurants/{id}/staff",
            post(create_staff_http::handle).get(list_staff_http::handle),
        )
        .route(
            "/restaurants/{id}/tables",
            post(create_table_http::handle).get(list_tables_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
