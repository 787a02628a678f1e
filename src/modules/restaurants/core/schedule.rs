// Weekly opening schedules and the interval rules they are admitted by.
//
// Purpose
// - Decide whether two opening windows on the same day collide, whether a moment falls inside a
//   window, and whether two schedule records are the same.
//
// Rules
// - A window with open <= close is normal; open > close wraps past midnight.
// - Touching endpoints never overlap. Comparisons use `<=` throughout.
// - Two windows that both wrap always overlap, since both contain midnight.
//
// Boundaries
// - Pure and synchronous. Loading and persisting schedules is the handler's job.

use crate::shared::core::day_of_week::DayOfWeek;
use crate::shared::core::time_of_day::{InvalidTimeFormat, TimeOfDay};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
}

impl ScheduleWindow {
    pub fn new(open_time: TimeOfDay, close_time: TimeOfDay) -> Self {
        Self {
            open_time,
            close_time,
        }
    }

    pub fn parse(open_time: &str, close_time: &str) -> Result<Self, InvalidTimeFormat> {
        Ok(Self::new(
            TimeOfDay::parse(open_time)?,
            TimeOfDay::parse(close_time)?,
        ))
    }

    pub fn wraps_midnight(&self) -> bool {
        self.open_time > self.close_time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub day_of_week: DayOfWeek,
    pub window: ScheduleWindow,
}

pub fn has_overlap(a: &ScheduleWindow, b: &ScheduleWindow) -> bool {
    let (open_a, close_a) = (a.open_time.minutes(), a.close_time.minutes());
    let (open_b, close_b) = (b.open_time.minutes(), b.close_time.minutes());

    if open_a <= close_a && open_b <= close_b {
        return !(close_a <= open_b || close_b <= open_a);
    }

    if open_a > close_a && open_b <= close_b {
        return !(close_a <= open_b && close_b <= open_a);
    }

    if open_b > close_b && open_a <= close_a {
        return !(close_b <= open_a && close_a <= open_b);
    }

    true
}

/// Inclusive on both ends. A wrapping window contains both its late-night and its early-morning part.
pub fn is_time_in_range(point: TimeOfDay, window: &ScheduleWindow) -> bool {
    if window.wraps_midnight() {
        point >= window.open_time || point <= window.close_time
    } else {
        window.open_time <= point && point <= window.close_time
    }
}

pub fn are_schedules_equal(a: &ScheduleSlot, b: &ScheduleSlot) -> bool {
    a.day_of_week == b.day_of_week
        && a.window.open_time == b.window.open_time
        && a.window.close_time == b.window.close_time
}

/// A wrapping window belongs to its tagged day until midnight; its early-morning tail belongs to the next day.
pub fn is_open_at(slots: &[ScheduleSlot], day: DayOfWeek, time: TimeOfDay) -> bool {
    slots.iter().any(|slot| {
        let window = &slot.window;
        if slot.day_of_week == day {
            is_time_in_range(time, window) && (!window.wraps_midnight() || time >= window.open_time)
        } else if slot.day_of_week == day.previous() && window.wraps_midnight() {
            is_time_in_range(time, window) && time <= window.close_time
        } else {
            false
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSchedule {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
}

impl RestaurantSchedule {
    pub fn window(&self) -> ScheduleWindow {
        ScheduleWindow::new(self.open_time, self.close_time)
    }

    pub fn slot(&self) -> ScheduleSlot {
        ScheduleSlot {
            day_of_week: self.day_of_week,
            window: self.window(),
        }
    }
}
