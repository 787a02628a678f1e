use crate::shared::core::day_of_week::DayOfWeek;
use uuid::Uuid;

/// Times stay raw until the handler has checked their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchedule {
    pub restaurant_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub open_time: String,
    pub close_time: String,
}
