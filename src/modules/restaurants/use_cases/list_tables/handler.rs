use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RestaurantRepository, TableRepository,
};
use crate::modules::restaurants::core::errors::ApplicationError;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::table::RestaurantTable;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;
use uuid::Uuid;

pub struct ListTablesHandler<TRestaurants, TTables>
where
    TRestaurants: RestaurantRepository + 'static,
    TTables: TableRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    tables: Arc<TTables>,
}

impl<TRestaurants, TTables> ListTablesHandler<TRestaurants, TTables>
where
    TRestaurants: RestaurantRepository + 'static,
    TTables: TableRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>, tables: Arc<TTables>) -> Self {
        Self {
            restaurants,
            tables,
        }
    }

    pub async fn handle(
        &self,
        scope: &AccessScope,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantTable>, ApplicationError> {
        load_visible_restaurant(&*self.restaurants, restaurant_id, scope).await?;
        let mut tables = self.tables.list_by_restaurant(restaurant_id).await?;
        tables.sort_by_key(|t| t.table_number);
        Ok(tables)
    }
}
