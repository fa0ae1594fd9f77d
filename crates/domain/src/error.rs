//! Common error types used across the workspace.
//!
//! Each failure has its own typed error; [`WaktuSolatError`] wraps them via
//! `#[from]` so callers can use `?` across layers.

use crate::clock_time::ClockTime;
use crate::prayer::PrayerName;

/// Top-level error for the waktusolat workspace.
#[derive(Debug, thiserror::Error)]
pub enum WaktuSolatError {
    /// A schedule clock time could not be parsed.
    #[error("malformed clock time")]
    MalformedTime(#[from] MalformedTimeError),

    /// A provider date label could not be parsed.
    #[error("malformed date label")]
    MalformedDate(#[from] MalformedDateError),

    /// A schedule invariant was broken upstream.
    #[error("schedule consistency violated")]
    InternalConsistency(#[from] InternalConsistencyError),

    /// The schedule provider failed.
    #[error("schedule provider error")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why an `HH:MM` clock string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTimeError {
    /// The input does not match `H:MM` / `HH:MM`.
    #[error("expected HH:MM, got {input:?}")]
    Pattern { input: String },

    /// The hour is outside `0..=23`.
    #[error("hour {hour} out of range in {input:?}")]
    HourOutOfRange { input: String, hour: u32 },

    /// The minute is outside `0..=59`.
    #[error("minute {minute} out of range in {input:?}")]
    MinuteOutOfRange { input: String, minute: u32 },
}

/// Why a provider date label (`"Sabtu, 19/07/2025"`) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedDateError {
    /// The input does not match `<Weekday>, DD/MM/YYYY`.
    #[error("expected \"<weekday>, DD/MM/YYYY\", got {input:?}")]
    Pattern { input: String },

    /// The day/month/year triple is not a calendar date.
    #[error("no such calendar date in {input:?}")]
    InvalidDate { input: String },
}

/// A classification invariant that should be guaranteed by the schedule
/// provider did not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalConsistencyError {
    /// The reference is before the last prayer but no prayer is after it.
    #[error("no upcoming prayer found before the last prayer of the day")]
    NoNextPrayer,

    /// Sunrise does not fall between Subuh and Zuhur.
    #[error("sunrise {sunrise} is outside Subuh {subuh} .. Zuhur {zuhur}")]
    SunriseOutOfOrder {
        sunrise: ClockTime,
        subuh: ClockTime,
        zuhur: ClockTime,
    },

    /// Several prayers claim the reference instant as their window.
    #[error("both {first} and {second} are current; schedule is not monotonic")]
    OverlappingWindows {
        first: PrayerName,
        second: PrayerName,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_malformed_time_into_top_level_error() {
        let err: WaktuSolatError = MalformedTimeError::Pattern {
            input: "4.30".to_string(),
        }
        .into();
        assert!(matches!(err, WaktuSolatError::MalformedTime(_)));
    }

    #[test]
    fn should_display_hour_out_of_range() {
        let err = MalformedTimeError::HourOutOfRange {
            input: "24:00".to_string(),
            hour: 24,
        };
        assert_eq!(err.to_string(), "hour 24 out of range in \"24:00\"");
    }

    #[test]
    fn should_display_overlapping_windows() {
        let err = InternalConsistencyError::OverlappingWindows {
            first: PrayerName::Zuhur,
            second: PrayerName::Ashar,
        };
        assert_eq!(
            err.to_string(),
            "both Zuhur and Ashar are current; schedule is not monotonic"
        );
    }

    #[test]
    fn should_display_sunrise_out_of_order() {
        let err = InternalConsistencyError::SunriseOutOfOrder {
            sunrise: ClockTime::new(4, 0).unwrap(),
            subuh: ClockTime::new(4, 30).unwrap(),
            zuhur: ClockTime::new(12, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "sunrise 04:00 is outside Subuh 04:30 .. Zuhur 12:00"
        );
    }

    #[test]
    fn should_keep_provider_source() {
        let io = std::io::Error::other("timeout");
        let err = WaktuSolatError::Provider(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "timeout");
    }
}
