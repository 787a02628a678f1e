use crate::modules::restaurants::core::errors::RestaurantError;
use crate::modules::restaurants::core::schedule::RestaurantSchedule;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("schedule overlaps with an existing schedule for this day")]
    Overlap,

    #[error("schedule already exists for this day")]
    AlreadyExists,
}

impl From<DecideError> for RestaurantError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::Overlap => RestaurantError::ScheduleOverlap,
            DecideError::AlreadyExists => RestaurantError::ScheduleAlreadyExists,
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { schedule: RestaurantSchedule },
    Rejected { reason: DecideError },
}
