// In memory implementation of the restaurants store ports.
//
// Purpose
// - Back handler tests and local development without a database.
//
// Responsibilities
// - Keep restaurants, schedules, staff and tables in maps keyed by id.
// - Version schedules per (restaurant, day) and reject appends against a stale version.
// - Enforce the unique keys a relational schema would: owner + name, staff e-mail, table number.

use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    LoadedSchedules, RepositoryError, RestaurantRepository, ScheduleRepository, StaffRepository,
    TableRepository,
};
use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use crate::modules::restaurants::core::staff::StaffMember;
use crate::modules::restaurants::core::table::RestaurantTable;
use crate::shared::core::day_of_week::DayOfWeek;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct ScheduleDay {
    version: i64,
    schedules: Vec<RestaurantSchedule>,
}

#[derive(Default)]
pub struct InMemoryRestaurantStore {
    restaurants: RwLock<HashMap<Uuid, Restaurant>>,
    schedules: RwLock<HashMap<(Uuid, DayOfWeek), ScheduleDay>>,
    staff: RwLock<HashMap<Uuid, StaffMember>>,
    tables: RwLock<HashMap<Uuid, RestaurantTable>>,
    delay_append_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widens the window between loading a day and appending to it.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Restaurant store offline".into()));
        }
        Ok(())
    }
}

fn name_taken(restaurants: &HashMap<Uuid, Restaurant>, candidate: &Restaurant) -> bool {
    restaurants.values().any(|existing| {
        existing.id != candidate.id
            && existing.owner_id == candidate.owner_id
            && existing.name == candidate.name
    })
}

#[async_trait::async_trait]
impl RestaurantRepository for InMemoryRestaurantStore {
    async fn insert(&self, restaurant: Restaurant) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.restaurants.write().await;
        if guard.contains_key(&restaurant.id) || name_taken(&guard, &restaurant) {
            return Err(RepositoryError::Duplicate(format!(
                "restaurant {}",
                restaurant.name
            )));
        }
        guard.insert(restaurant.id, restaurant);
        Ok(())
    }

    async fn update(&self, restaurant: Restaurant) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.restaurants.write().await;
        if !guard.contains_key(&restaurant.id) {
            return Err(RepositoryError::Backend(format!(
                "restaurant {} does not exist",
                restaurant.id
            )));
        }
        if name_taken(&guard, &restaurant) {
            return Err(RepositoryError::Duplicate(format!(
                "restaurant {}",
                restaurant.name
            )));
        }
        guard.insert(restaurant.id, restaurant);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.restaurants.read().await.get(&id).cloned())
    }

    async fn find_by_owner_and_name(
        &self,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<Restaurant>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .restaurants
            .read()
            .await
            .values()
            .find(|r| r.owner_id == owner_id && r.name == name)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, RepositoryError> {
        self.ensure_online()?;
        let mut items: Vec<Restaurant> = self
            .restaurants
            .read()
            .await
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

#[async_trait::async_trait]
impl ScheduleRepository for InMemoryRestaurantStore {
    async fn load_day(
        &self,
        restaurant_id: Uuid,
        day_of_week: DayOfWeek,
    ) -> Result<LoadedSchedules, RepositoryError> {
        self.ensure_online()?;
        let guard = self.schedules.read().await;
        Ok(guard
            .get(&(restaurant_id, day_of_week))
            .map(|day| LoadedSchedules {
                schedules: day.schedules.clone(),
                version: day.version,
            })
            .unwrap_or(LoadedSchedules {
                schedules: Vec::new(),
                version: 0,
            }))
    }

    async fn append(
        &self,
        expected_version: i64,
        schedule: RestaurantSchedule,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.schedules.write().await;
        let day = guard
            .entry((schedule.restaurant_id, schedule.day_of_week))
            .or_default();
        if day.version != expected_version {
            return Err(RepositoryError::VersionMismatch {
                expected: expected_version,
                actual: day.version,
            });
        }
        day.schedules.push(schedule);
        day.version += 1;
        Ok(())
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantSchedule>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.schedules.read().await;
        let mut items: Vec<RestaurantSchedule> = guard
            .iter()
            .filter(|((rid, _), _)| *rid == restaurant_id)
            .flat_map(|(_, day)| day.schedules.iter().cloned())
            .collect();
        items.sort_by_key(|s| (s.day_of_week, s.open_time));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RestaurantSchedule>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .schedules
            .read()
            .await
            .values()
            .flat_map(|day| day.schedules.iter())
            .find(|s| s.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<RestaurantSchedule>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.schedules.write().await;
        for day in guard.values_mut() {
            if let Some(position) = day.schedules.iter().position(|s| s.id == id) {
                let removed = day.schedules.remove(position);
                day.version += 1;
                return Ok(Some(removed));
            }
        }
        Ok(None)
    }
}

#[async_trait::async_trait]
impl StaffRepository for InMemoryRestaurantStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffMember>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .staff
            .read()
            .await
            .values()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn insert(&self, member: StaffMember) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.staff.write().await;
        if guard.values().any(|m| m.email == member.email) {
            return Err(RepositoryError::Duplicate(format!("staff {}", member.email)));
        }
        guard.insert(member.id, member);
        Ok(())
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<StaffMember>, RepositoryError> {
        self.ensure_online()?;
        let mut items: Vec<StaffMember> = self
            .staff
            .read()
            .await
            .values()
            .filter(|m| m.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        items.sort_by_key(|m| m.created_at);
        Ok(items)
    }
}

#[async_trait::async_trait]
impl TableRepository for InMemoryRestaurantStore {
    async fn count_by_restaurant(&self, restaurant_id: Uuid) -> Result<u32, RepositoryError> {
        self.ensure_online()?;
        let count = self
            .tables
            .read()
            .await
            .values()
            .filter(|t| t.restaurant_id == restaurant_id)
            .count();
        u32::try_from(count).map_err(|e| RepositoryError::Backend(e.to_string()))
    }

    async fn insert(&self, table: RestaurantTable) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        if guard.values().any(|t| {
            t.restaurant_id == table.restaurant_id && t.table_number == table.table_number
        }) {
            return Err(RepositoryError::Duplicate(format!(
                "table {}",
                table.table_number
            )));
        }
        guard.insert(table.id, table);
        Ok(())
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<RestaurantTable>, RepositoryError> {
        self.ensure_online()?;
        let mut items: Vec<RestaurantTable> = self
            .tables
            .read()
            .await
            .values()
            .filter(|t| t.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        items.sort_by_key(|t| t.table_number);
        Ok(items)
    }
}
