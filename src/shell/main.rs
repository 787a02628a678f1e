use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use restaurants::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
use restaurants::shared::infrastructure::identity_provider::in_memory::InMemoryIdentityProvider;
use restaurants::shared::infrastructure::identity_provider::{Identity, UserRole};
use restaurants::shell::config::AppConfig;
use restaurants::shell::http::router;
use restaurants::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryRestaurantStore::new());
    let identity_provider = Arc::new(InMemoryIdentityProvider::new());
    if let Some(token) = &config.dev_access_token {
        identity_provider
            .issue_token(
                token.clone(),
                Identity {
                    user_id: "dev-tenant".to_string(),
                    email: "dev-tenant@localhost".to_string(),
                    role: UserRole::Tenant,
                },
            )
            .await;
        tracing::warn!("DEV_ACCESS_TOKEN accepted as a tenant session");
    }

    let frontend_origin = config.frontend_url.trim_end_matches('/').parse::<HeaderValue>()?;
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let address = config.bind_address();
    let environment = config.environment.clone();
    let app = router(AppState::new(config, store, identity_provider))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, %environment, "listening; GraphQL endpoint at /gql");
    axum::serve(listener, app).await?;
    Ok(())
}
