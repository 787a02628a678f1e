// Builders for restaurants context records. Defaults come from the JSON files next to this module;
// ids are fresh on every build.

use crate::modules::restaurants::core::restaurant::{Restaurant, RestaurantStatus};
use crate::modules::restaurants::core::schedule::RestaurantSchedule;
use crate::modules::restaurants::core::staff::{StaffMember, StaffRole};
use crate::modules::restaurants::core::table::RestaurantTable;
use crate::shared::core::day_of_week::DayOfWeek;
use crate::shared::core::time_of_day::TimeOfDay;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantDto {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub status: RestaurantStatus,
    pub is_open: bool,
    pub created_at: i64,
}

pub struct RestaurantBuilder {
    inner: Restaurant,
}

impl Default for RestaurantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RestaurantBuilder {
    pub fn new() -> Self {
        let dto: RestaurantDto = serde_json::from_str(include_str!("json/restaurant.json")).unwrap();
        Self {
            inner: Restaurant {
                id: Uuid::now_v7(),
                owner_id: dto.owner_id,
                name: dto.name,
                address: dto.address,
                status: dto.status,
                is_open: dto.is_open,
                logo_url: None,
                created_at: dto.created_at,
                updated_at: dto.created_at,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn status(mut self, v: RestaurantStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Restaurant {
        self.inner
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDto {
    pub day_of_week: DayOfWeek,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
}

pub struct ScheduleBuilder {
    inner: RestaurantSchedule,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleBuilder {
    pub fn new() -> Self {
        let dto: ScheduleDto = serde_json::from_str(include_str!("json/schedule.json")).unwrap();
        Self {
            inner: RestaurantSchedule {
                id: Uuid::now_v7(),
                restaurant_id: Uuid::now_v7(),
                day_of_week: dto.day_of_week,
                open_time: dto.open_time,
                close_time: dto.close_time,
            },
        }
    }

    pub fn restaurant_id(mut self, v: Uuid) -> Self {
        self.inner.restaurant_id = v;
        self
    }

    pub fn day_of_week(mut self, v: DayOfWeek) -> Self {
        self.inner.day_of_week = v;
        self
    }

    pub fn times(mut self, open: &str, close: &str) -> Self {
        self.inner.open_time = TimeOfDay::parse(open).unwrap();
        self.inner.close_time = TimeOfDay::parse(close).unwrap();
        self
    }

    pub fn build(self) -> RestaurantSchedule {
        self.inner
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffMemberDto {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: i64,
}

pub struct StaffMemberBuilder {
    inner: StaffMember,
}

impl Default for StaffMemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StaffMemberBuilder {
    pub fn new() -> Self {
        let dto: StaffMemberDto =
            serde_json::from_str(include_str!("json/staff_member.json")).unwrap();
        Self {
            inner: StaffMember {
                id: Uuid::now_v7(),
                restaurant_id: Uuid::now_v7(),
                identity_id: Uuid::now_v7().to_string(),
                email: dto.email,
                name: dto.name,
                last_name: dto.last_name,
                role: dto.role,
                is_active: dto.is_active,
                created_at: dto.created_at,
                updated_at: dto.created_at,
            },
        }
    }

    pub fn restaurant_id(mut self, v: Uuid) -> Self {
        self.inner.restaurant_id = v;
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> StaffMember {
        self.inner
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableDto {
    pub table_number: u32,
    pub seating_capacity: u32,
    pub is_available: bool,
    pub location: String,
}

pub struct TableBuilder {
    inner: RestaurantTable,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TableBuilder {
    pub fn new() -> Self {
        let dto: TableDto = serde_json::from_str(include_str!("json/table.json")).unwrap();
        let restaurant_id = Uuid::now_v7();
        Self {
            inner: RestaurantTable {
                id: Uuid::now_v7(),
                restaurant_id,
                table_number: dto.table_number,
                seating_capacity: dto.seating_capacity,
                is_available: dto.is_available,
                location: dto.location,
                qr_code: format!("http://localhost:4000/{restaurant_id}/{}", dto.table_number),
            },
        }
    }

    pub fn restaurant_id(mut self, v: Uuid) -> Self {
        self.inner.restaurant_id = v;
        self
    }

    pub fn table_number(mut self, v: u32) -> Self {
        self.inner.table_number = v;
        self
    }

    pub fn build(self) -> RestaurantTable {
        self.inner
    }
}

#[cfg(test)]
mod restaurant_builders_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let restaurant = RestaurantBuilder::default().build();
        assert_eq!(restaurant.owner_id, "tenant-0001");
        assert_eq!(restaurant.name, "Trattoria Nonna");
        assert_eq!(restaurant.status, RestaurantStatus::Active);

        let schedule = ScheduleBuilder::default().build();
        assert_eq!(schedule.day_of_week, DayOfWeek::Monday);
        assert_eq!(schedule.open_time.to_string(), "09:00");
        assert_eq!(schedule.close_time.to_string(), "17:00");

        assert_eq!(StaffMemberBuilder::default().build().role, StaffRole::Waiter);
        assert_eq!(TableBuilder::default().build().seating_capacity, 4);
    }

    #[rstest]
    fn setters_override_fields_and_ids_stay_fresh() {
        let restaurant_id = Uuid::now_v7();
        let a = ScheduleBuilder::new()
            .restaurant_id(restaurant_id)
            .day_of_week(DayOfWeek::Friday)
            .times("22:00", "02:00")
            .build();
        let b = ScheduleBuilder::new().build();
        assert_eq!(a.restaurant_id, restaurant_id);
        assert_eq!(a.day_of_week, DayOfWeek::Friday);
        assert!(a.window().wraps_midnight());
        assert_ne!(a.id, b.id);
    }
}
