use crate::modules::restaurants::adapters::outbound::restaurant_store::RestaurantRepository;
use crate::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::identities::make_identity_provider;
use crate::tests::fixtures::restaurants::RestaurantBuilder;
use std::sync::Arc;

pub fn make_test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        frontend_url: "http://localhost:4000/".to_string(),
        environment: "test".to_string(),
        dev_access_token: None,
    }
}

pub async fn make_test_state(store: Arc<InMemoryRestaurantStore>) -> AppState {
    AppState::new(
        make_test_config(),
        store,
        Arc::new(make_identity_provider().await),
    )
}

pub async fn make_offline_store_state() -> AppState {
    let mut store = InMemoryRestaurantStore::new();
    store.toggle_offline();
    make_test_state(Arc::new(store)).await
}

/// Stores a restaurant owned by the fixture tenant.
pub async fn seed_restaurant(store: &InMemoryRestaurantStore) -> Restaurant {
    let restaurant = RestaurantBuilder::new().build();
    RestaurantRepository::insert(store, restaurant.clone())
        .await
        .unwrap();
    restaurant
}
