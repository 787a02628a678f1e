// Wall-clock time of day, stored as minutes since midnight.
//
// Purpose
// - Turn strict "HH:mm" strings (00:00-23:59) into an integer all interval arithmetic runs on.
//
// Boundaries
// - Anything not matching the pattern is rejected here, before it reaches comparison logic.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").expect("time format pattern compiles")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid time format {0:?}, expected HH:mm (00:00-23:59)")]
pub struct InvalidTimeFormat(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

pub fn is_valid_time_format(text: &str) -> bool {
    TIME_FORMAT.is_match(text)
}

/// Minutes since midnight for a strict "HH:mm" string.
pub fn parse_time(text: &str) -> Result<u16, InvalidTimeFormat> {
    TimeOfDay::parse(text).map(TimeOfDay::minutes)
}

impl TimeOfDay {
    pub fn parse(text: &str) -> Result<Self, InvalidTimeFormat> {
        let invalid = || InvalidTimeFormat(text.to_string());
        if !is_valid_time_format(text) {
            return Err(invalid());
        }
        let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeFormat;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidTimeFormat;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
