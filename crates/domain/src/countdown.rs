//! Countdown — Indonesian "in X hours Y minutes" rendering.

use chrono::TimeDelta;
use serde::Serialize;

const MILLIS_PER_MINUTE: u64 = 60_000;

/// Whole hours and minutes remaining until a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
}

impl Countdown {
    /// Round `remaining` to the nearest minute (halves round up) and split it
    /// into hours and minutes.
    ///
    /// Returns `None` when `remaining` is zero or negative: the prayer has
    /// already been reached and no countdown applies.
    #[must_use]
    pub fn until(remaining: TimeDelta) -> Option<Self> {
        if remaining <= TimeDelta::zero() {
            return None;
        }
        let millis = u64::try_from(remaining.num_milliseconds()).ok()?;
        let total_minutes = (millis + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE;
        Some(Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        })
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hours > 0 {
            write!(f, "Dalam {} jam", self.hours)?;
            if self.minutes > 0 {
                write!(f, " {} menit", self.minutes)?;
            }
            Ok(())
        } else {
            write!(f, "Dalam {} menit", self.minutes)
        }
    }
}

/// Format the countdown string for `remaining`, or `None` if it is not
/// strictly positive.
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> Option<String> {
    Countdown::until(remaining).map(|countdown| countdown.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_whole_hours_without_minutes() {
        assert_eq!(
            format_countdown(TimeDelta::hours(7)).as_deref(),
            Some("Dalam 7 jam")
        );
    }

    #[test]
    fn should_render_hours_and_minutes() {
        let d = TimeDelta::hours(8) + TimeDelta::minutes(30);
        assert_eq!(format_countdown(d).as_deref(), Some("Dalam 8 jam 30 menit"));
    }

    #[test]
    fn should_render_minutes_only_below_one_hour() {
        assert_eq!(
            format_countdown(TimeDelta::minutes(59)).as_deref(),
            Some("Dalam 59 menit")
        );
    }

    #[test]
    fn should_round_half_minute_up() {
        let d = TimeDelta::minutes(14) + TimeDelta::seconds(30);
        assert_eq!(format_countdown(d).as_deref(), Some("Dalam 15 menit"));
    }

    #[test]
    fn should_round_below_half_minute_down() {
        let d = TimeDelta::minutes(14) + TimeDelta::milliseconds(29_999);
        assert_eq!(format_countdown(d).as_deref(), Some("Dalam 14 menit"));
    }

    #[test]
    fn should_carry_rounding_into_hours() {
        let d = TimeDelta::minutes(59) + TimeDelta::seconds(45);
        assert_eq!(format_countdown(d).as_deref(), Some("Dalam 1 jam"));
    }

    #[test]
    fn should_render_zero_minutes_for_tiny_positive_duration() {
        assert_eq!(
            format_countdown(TimeDelta::seconds(10)).as_deref(),
            Some("Dalam 0 menit")
        );
    }

    #[test]
    fn should_omit_countdown_when_not_positive() {
        assert_eq!(format_countdown(TimeDelta::zero()), None);
        assert_eq!(format_countdown(TimeDelta::minutes(-3)), None);
    }

    #[test]
    fn should_split_hours_and_minutes() {
        let countdown = Countdown::until(TimeDelta::minutes(135)).unwrap();
        assert_eq!(countdown, Countdown { hours: 2, minutes: 15 });
    }
}
