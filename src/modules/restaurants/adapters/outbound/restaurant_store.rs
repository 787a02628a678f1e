// Outbound ports of the restaurants context, one per aggregate table.
//
// Responsibilities
// - Uniqueness that must hold under concurrency is enforced by the store and reported as Duplicate.
// - Schedules of one (restaurant, day) carry a version; append fails when it moved since load_day.

use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use crate::modules::restaurants::core::staff::StaffMember;
use crate::modules::restaurants::core::table::RestaurantTable;
use crate::shared::core::day_of_week::DayOfWeek;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("duplicate entry: {0}")]
    Duplicate(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn insert(&self, restaurant: Restaurant) -> Result<(), RepositoryError>;
    async fn update(&self, restaurant: Restaurant) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, RepositoryError>;
    async fn find_by_owner_and_name(
        &self,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<Restaurant>, RepositoryError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct LoadedSchedules {
    pub schedules: Vec<RestaurantSchedule>,
    pub version: i64,
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn load_day(
        &self,
        restaurant_id: Uuid,
        day_of_week: DayOfWeek,
    ) -> Result<LoadedSchedules, RepositoryError>;
    async fn append(
        &self,
        expected_version: i64,
        schedule: RestaurantSchedule,
    ) -> Result<(), RepositoryError>;
    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantSchedule>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RestaurantSchedule>, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<Option<RestaurantSchedule>, RepositoryError>;
}

#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffMember>, RepositoryError>;
    async fn insert(&self, member: StaffMember) -> Result<(), RepositoryError>;
    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<StaffMember>, RepositoryError>;
}

#[async_trait]
pub trait TableRepository: Send + Sync {
    async fn count_by_restaurant(&self, restaurant_id: Uuid) -> Result<u32, RepositoryError>;
    async fn insert(&self, table: RestaurantTable) -> Result<(), RepositoryError>;
    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantTable>, RepositoryError>;
}
