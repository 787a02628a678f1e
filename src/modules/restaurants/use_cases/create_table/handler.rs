use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RepositoryError, RestaurantRepository, TableRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::table::{RestaurantTable, table_deep_link};
use crate::modules::restaurants::use_cases::create_table::command::CreateTable;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateTableHandler<TRestaurants, TTables>
where
    TRestaurants: RestaurantRepository + 'static,
    TTables: TableRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    tables: Arc<TTables>,
    frontend_url: String,
}

impl<TRestaurants, TTables> CreateTableHandler<TRestaurants, TTables>
where
    TRestaurants: RestaurantRepository + 'static,
    TTables: TableRepository + 'static,
{
    pub fn new(
        restaurants: Arc<TRestaurants>,
        tables: Arc<TTables>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            restaurants,
            tables,
            frontend_url: frontend_url.into(),
        }
    }

    pub async fn handle(
        &self,
        scope: &AccessScope,
        command: CreateTable,
    ) -> Result<RestaurantTable, ApplicationError> {
        load_visible_restaurant(&*self.restaurants, command.restaurant_id, scope).await?;

        let table_number = match command.table_number {
            Some(n) => n,
            None => self.tables.count_by_restaurant(command.restaurant_id).await? + 1,
        };

        let table = RestaurantTable {
            id: Uuid::now_v7(),
            restaurant_id: command.restaurant_id,
            table_number,
            seating_capacity: command.seating_capacity,
            is_available: command.is_available,
            location: command.location,
            qr_code: table_deep_link(&self.frontend_url, command.restaurant_id, table_number),
        };

        match self.tables.insert(table.clone()).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(_)) => {
                return Err(RestaurantError::RestaurantTableAlreadyExists(table_number).into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(table_id = %table.id, restaurant_id = %table.restaurant_id, table_number, "table created");
        Ok(table)
    }
}
