use crate::modules::restaurants::adapters::outbound::restaurant_store_in_memory::InMemoryRestaurantStore;
use crate::modules::restaurants::use_cases::check_opening_status::handler::CheckOpeningStatusHandler;
use crate::modules::restaurants::use_cases::create_restaurant::handler::CreateRestaurantHandler;
use crate::modules::restaurants::use_cases::create_schedule::handler::CreateScheduleHandler;
use crate::modules::restaurants::use_cases::create_staff::handler::CreateStaffHandler;
use crate::modules::restaurants::use_cases::create_table::handler::CreateTableHandler;
use crate::modules::restaurants::use_cases::delete_schedule::handler::DeleteScheduleHandler;
use crate::modules::restaurants::use_cases::list_restaurants::handler::ListRestaurantsHandler;
use crate::modules::restaurants::use_cases::list_schedules::handler::ListSchedulesHandler;
use crate::modules::restaurants::use_cases::list_staff::handler::ListStaffHandler;
use crate::modules::restaurants::use_cases::list_tables::handler::ListTablesHandler;
use crate::modules::restaurants::use_cases::update_restaurant::handler::UpdateRestaurantHandler;
use crate::shared::infrastructure::identity_provider::IdentityProvider;
use crate::shared::infrastructure::identity_provider::in_memory::InMemoryIdentityProvider;
use crate::shell::config::AppConfig;
use std::sync::Arc;

type Store = InMemoryRestaurantStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub create_restaurant_handler: Arc<CreateRestaurantHandler<Store>>,
    pub list_restaurants_handler: Arc<ListRestaurantsHandler<Store>>,
    pub update_restaurant_handler: Arc<UpdateRestaurantHandler<Store>>,
    pub create_schedule_handler: Arc<CreateScheduleHandler<Store, Store>>,
    pub list_schedules_handler: Arc<ListSchedulesHandler<Store, Store>>,
    pub delete_schedule_handler: Arc<DeleteScheduleHandler<Store, Store>>,
    pub opening_status_handler: Arc<CheckOpeningStatusHandler<Store, Store>>,
    pub create_staff_handler: Arc<CreateStaffHandler<Store, Store, InMemoryIdentityProvider>>,
    pub list_staff_handler: Arc<ListStaffHandler<Store, Store>>,
    pub create_table_handler: Arc<CreateTableHandler<Store, Store>>,
    pub list_tables_handler: Arc<ListTablesHandler<Store, Store>>,
}

impl AppState {
    /// Wires every use case onto one store and one identity provider.
    pub fn new(
        config: AppConfig,
        store: Arc<Store>,
        identity_provider: Arc<InMemoryIdentityProvider>,
    ) -> Self {
        Self {
            create_restaurant_handler: Arc::new(CreateRestaurantHandler::new(store.clone())),
            list_restaurants_handler: Arc::new(ListRestaurantsHandler::new(store.clone())),
            update_restaurant_handler: Arc::new(UpdateRestaurantHandler::new(store.clone())),
            create_schedule_handler: Arc::new(CreateScheduleHandler::new(
                store.clone(),
                store.clone(),
            )),
            list_schedules_handler: Arc::new(ListSchedulesHandler::new(
                store.clone(),
                store.clone(),
            )),
            delete_schedule_handler: Arc::new(DeleteScheduleHandler::new(
                store.clone(),
                store.clone(),
            )),
            opening_status_handler: Arc::new(CheckOpeningStatusHandler::new(
                store.clone(),
                store.clone(),
            )),
            create_staff_handler: Arc::new(CreateStaffHandler::new(
                store.clone(),
                store.clone(),
                identity_provider.clone(),
            )),
            list_staff_handler: Arc::new(ListStaffHandler::new(store.clone(), store.clone())),
            create_table_handler: Arc::new(CreateTableHandler::new(
                store.clone(),
                store.clone(),
                config.frontend_url.clone(),
            )),
            list_tables_handler: Arc::new(ListTablesHandler::new(store.clone(), store)),
            identity_provider,
            config: Arc::new(config),
        }
    }
}
