use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RestaurantRepository, StaffRepository,
};
use crate::modules::restaurants::core::errors::ApplicationError;
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::staff::StaffMember;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use std::sync::Arc;
use uuid::Uuid;

pub struct ListStaffHandler<TRestaurants, TStaff>
where
    TRestaurants: RestaurantRepository + 'static,
    TStaff: StaffRepository + 'static,
{
    restaurants: Arc<TRestaurants>,
    staff: Arc<TStaff>,
}

impl<TRestaurants, TStaff> ListStaffHandler<TRestaurants, TStaff>
where
    TRestaurants: RestaurantRepository + 'static,
    TStaff: StaffRepository + 'static,
{
    pub fn new(restaurants: Arc<TRestaurants>, staff: Arc<TStaff>) -> Self {
        Self { restaurants, staff }
    }

    pub async fn handle(
        &self,
        scope: &AccessScope,
        restaurant_id: Uuid,
    ) -> Result<Vec<StaffMember>, ApplicationError> {
        load_visible_restaurant(&*self.restaurants, restaurant_id, scope).await?;
        Ok(self.staff.list_by_restaurant(restaurant_id).await?)
    }
}
