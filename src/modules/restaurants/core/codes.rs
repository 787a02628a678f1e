/// Response codes of the restaurants context, as clients match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantCode {
    RestaurantCreated,
    RestaurantUpdated,
    RestaurantsFound,
    RestaurantNotFound,
    RestaurantAlreadyExists,
    ScheduleCreated,
    SchedulesFound,
    SchedulesNotFound,
    ScheduleDeleted,
    InvalidScheduleFormat,
    ScheduleOverlap,
    ScheduleAlreadyExists,
    OpeningStatusFound,
    StaffCreated,
    StaffsFound,
    StaffsNotFound,
    StaffAlreadyExists,
    ErrorCreatingStaff,
    RestaurantTableCreated,
    RestaurantTablesFound,
    RestaurantTablesNotFound,
    RestaurantTableAlreadyExists,
}

impl RestaurantCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RestaurantCode::RestaurantCreated => "RESTAURANT_CREATED",
            RestaurantCode::RestaurantUpdated => "RESTAURANT_UPDATED",
            RestaurantCode::RestaurantsFound => "RESTAURANTS_FOUND",
            RestaurantCode::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            RestaurantCode::RestaurantAlreadyExists => "RESTAURANT_ALREADY_EXISTS",
            RestaurantCode::ScheduleCreated => "SCHEDULE_CREATED",
            RestaurantCode::SchedulesFound => "SCHEDULES_FOUND",
            RestaurantCode::SchedulesNotFound => "SCHEDULES_NOT_FOUND",
            RestaurantCode::ScheduleDeleted => "SCHEDULE_DELETED",
            RestaurantCode::InvalidScheduleFormat => "INVALID_SCHEDULE_FORMAT",
            RestaurantCode::ScheduleOverlap => "SCHEDULE_OVERLAP",
            RestaurantCode::ScheduleAlreadyExists => "SCHEDULE_ALREADY_EXISTS",
            RestaurantCode::OpeningStatusFound => "OPENING_STATUS_FOUND",
            RestaurantCode::StaffCreated => "STAFF_CREATED",
            RestaurantCode::StaffsFound => "STAFFS_FOUND",
            RestaurantCode::StaffsNotFound => "STAFFS_NOT_FOUND",
            RestaurantCode::StaffAlreadyExists => "STAFF_ALREADY_EXISTS",
            RestaurantCode::ErrorCreatingStaff => "ERROR_CREATING_STAFF",
            RestaurantCode::RestaurantTableCreated => "RESTAURANT_TABLE_CREATED",
            RestaurantCode::RestaurantTablesFound => "RESTAURANT_TABLES_FOUND",
            RestaurantCode::RestaurantTablesNotFound => "RESTAURANT_TABLES_NOT_FOUND",
            RestaurantCode::RestaurantTableAlreadyExists => "RESTAURANT_TABLE_ALREADY_EXISTS",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RestaurantCode::RestaurantCreated => "Restaurant created successfully",
            RestaurantCode::RestaurantUpdated => "Restaurant updated successfully",
            RestaurantCode::RestaurantsFound => "Restaurants found",
            RestaurantCode::RestaurantNotFound => "Restaurant not found",
            RestaurantCode::RestaurantAlreadyExists => "A restaurant with this name already exists",
            RestaurantCode::ScheduleCreated => "Schedule created successfully",
            RestaurantCode::SchedulesFound => "Schedules found for this restaurant",
            RestaurantCode::SchedulesNotFound => "No schedules found for this restaurant",
            RestaurantCode::ScheduleDeleted => "Schedule deleted successfully",
            RestaurantCode::InvalidScheduleFormat => {
                "Invalid schedule time format. Use HH:mm format (00:00-23:59)"
            }
            RestaurantCode::ScheduleOverlap => {
                "Schedule overlaps with an existing schedule for this day"
            }
            RestaurantCode::ScheduleAlreadyExists => "This schedule already exists for this day",
            RestaurantCode::OpeningStatusFound => "Opening status resolved",
            RestaurantCode::StaffCreated => "Staff member created successfully",
            RestaurantCode::StaffsFound => "Staff members found",
            RestaurantCode::StaffsNotFound => "No staff members found for this restaurant",
            RestaurantCode::StaffAlreadyExists => "A staff member with this email already exists",
            RestaurantCode::ErrorCreatingStaff => "Error creating staff member",
            RestaurantCode::RestaurantTableCreated => "Restaurant table created successfully",
            RestaurantCode::RestaurantTablesFound => "Restaurant tables found",
            RestaurantCode::RestaurantTablesNotFound => "No tables found for this restaurant",
            RestaurantCode::RestaurantTableAlreadyExists => {
                "A table with this number already exists for this restaurant"
            }
        }
    }
}
