use crate::modules::restaurants::adapters::outbound::restaurant_store::RepositoryError;
use crate::modules::restaurants::core::codes::RestaurantCode;
use crate::shared::infrastructure::identity_provider::IdentityError;
use thiserror::Error;
use uuid::Uuid;

/// Business rejections. Clients can act on these, retrying them never helps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestaurantError {
    #[error("invalid schedule format: {0}")]
    InvalidScheduleFormat(String),

    #[error("restaurant {0} not found")]
    RestaurantNotFound(Uuid),

    #[error("schedule overlaps with an existing schedule for this day")]
    ScheduleOverlap,

    #[error("schedule already exists for this day")]
    ScheduleAlreadyExists,

    #[error("schedule {0} not found")]
    ScheduleNotFound(Uuid),

    #[error("restaurant named {0:?} already exists")]
    RestaurantAlreadyExists(String),

    #[error("staff member {0} already exists")]
    StaffAlreadyExists(String),

    #[error("table {0} already exists")]
    RestaurantTableAlreadyExists(u32),

    #[error("identity provider refused the staff account: {0}")]
    StaffAccountRefused(String),
}

impl RestaurantError {
    pub fn code(&self) -> RestaurantCode {
        match self {
            RestaurantError::InvalidScheduleFormat(_) => RestaurantCode::InvalidScheduleFormat,
            RestaurantError::RestaurantNotFound(_) => RestaurantCode::RestaurantNotFound,
            RestaurantError::ScheduleOverlap => RestaurantCode::ScheduleOverlap,
            RestaurantError::ScheduleAlreadyExists => RestaurantCode::ScheduleAlreadyExists,
            RestaurantError::ScheduleNotFound(_) => RestaurantCode::SchedulesNotFound,
            RestaurantError::RestaurantAlreadyExists(_) => RestaurantCode::RestaurantAlreadyExists,
            RestaurantError::StaffAlreadyExists(_) => RestaurantCode::StaffAlreadyExists,
            RestaurantError::RestaurantTableAlreadyExists(_) => {
                RestaurantCode::RestaurantTableAlreadyExists
            }
            RestaurantError::StaffAccountRefused(_) => RestaurantCode::ErrorCreatingStaff,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("domain rejected: {0}")]
    Domain(#[from] RestaurantError),
}
