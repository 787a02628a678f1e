use crate::modules::restaurants::core::schedule::{
    RestaurantSchedule, are_schedules_equal, has_overlap,
};
use crate::modules::restaurants::use_cases::create_schedule::decision::{DecideError, Decision};

/// Admits `candidate` against the schedules already stored for its restaurant and day.
/// Overlap is checked before exact duplicates.
pub fn decide_create_schedule(
    existing: &[RestaurantSchedule],
    candidate: RestaurantSchedule,
) -> Decision {
    let slot = candidate.slot();
    let same_day = || {
        existing
            .iter()
            .filter(move |schedule| schedule.day_of_week == slot.day_of_week)
    };

    if same_day().any(|schedule| has_overlap(&schedule.window(), &slot.window)) {
        return Decision::Rejected {
            reason: DecideError::Overlap,
        };
    }

    if same_day().any(|schedule| are_schedules_equal(&schedule.slot(), &slot)) {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }

    Decision::Accepted {
        schedule: candidate,
    }
}
