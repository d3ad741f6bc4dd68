//! Time-of-day values and their "HH:MM" text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MalformedTimeError;

/// Number of minutes in the single day a timeline covers.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse an "HH:MM" string into a minute offset from midnight.
///
/// Hours run 0-23 and minutes 0-59. "24:00" is also accepted so that a shift
/// can end exactly at the end of the day.
pub fn to_minutes(time: &str) -> Result<i32, MalformedTimeError> {
    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| MalformedTimeError::new(time, "missing ':' separator"))?;

    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedTimeError::new(time, "hour must be one or two digits"));
    }
    if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedTimeError::new(time, "minute must be two digits"));
    }

    // Both parts are short digit strings, so these cannot overflow.
    let hour: i32 = hour
        .parse()
        .map_err(|_| MalformedTimeError::new(time, "hour is not a number"))?;
    let minute: i32 = minute
        .parse()
        .map_err(|_| MalformedTimeError::new(time, "minute is not a number"))?;

    if minute > 59 {
        return Err(MalformedTimeError::new(time, "minute out of range 0-59"));
    }
    match hour {
        0..=23 => Ok(hour * 60 + minute),
        24 if minute == 0 => Ok(MINUTES_PER_DAY),
        _ => Err(MalformedTimeError::new(time, "hour out of range 0-23")),
    }
}

/// Format a minute offset as a zero-padded "HH:MM" string.
pub fn to_time_string(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}

/// A point within one day, stored as minutes since midnight in `0..=1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY as u16);

    /// Returns `None` when `minutes` falls outside the day.
    pub fn from_minutes(minutes: i32) -> Option<Self> {
        if (0..=MINUTES_PER_DAY).contains(&minutes) {
            Some(Self(minutes as u16))
        } else {
            None
        }
    }

    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if minute > 59 {
            return None;
        }
        Self::from_minutes(i32::from(hour) * 60 + i32::from(minute))
    }

    pub fn minutes(self) -> i32 {
        i32::from(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_time_string(self.minutes()))
    }
}

impl FromStr for TimeOfDay {
    type Err = MalformedTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // to_minutes already bounds the value to 0..=1440.
        to_minutes(s.trim()).map(|m| Self(m as u16))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = MalformedTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
