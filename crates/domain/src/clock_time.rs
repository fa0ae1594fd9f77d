//! Clock time — a validated `HH:MM` wall-clock reading without a date.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::MalformedTimeError;
use crate::time::CivilInstant;

/// Hour and minute of a schedule entry, seconds implicitly zero.
///
/// Parses from `H:MM` or `HH:MM` and always displays zero-padded (`04:30`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build from numeric parts.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTimeError`] when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, MalformedTimeError> {
        let input = format!("{hour:02}:{minute:02}");
        Self::checked(&input, hour, minute)
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Bind this clock reading to a calendar date.
    #[must_use]
    pub fn on(self, date: NaiveDate) -> CivilInstant {
        date.and_time(self.into())
    }

    fn checked(input: &str, hour: u32, minute: u32) -> Result<Self, MalformedTimeError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or_else(|| MalformedTimeError::HourOutOfRange {
                input: input.to_string(),
                hour,
            })?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m <= 59)
            .ok_or_else(|| MalformedTimeError::MinuteOutOfRange {
                input: input.to_string(),
                minute,
            })?;
        Ok(Self { hour, minute })
    }
}

fn digits(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    let len_ok = (min_len..=max_len).contains(&part.len());
    if !len_ok || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for ClockTime {
    type Err = MalformedTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern_error = || MalformedTimeError::Pattern {
            input: s.to_string(),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(pattern_error)?;
        let hour = digits(hour, 1, 2).ok_or_else(pattern_error)?;
        let minute = digits(minute, 2, 2).ok_or_else(pattern_error)?;
        Self::checked(s, hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = MalformedTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(value: ClockTime) -> Self {
        // Range is checked on construction.
        NaiveTime::from_hms_opt(u32::from(value.hour), u32::from(value.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
