//! Schedule normalizer — binds raw `HH:MM` entries to the reference civil day.

use serde::Serialize;

use crate::clock_time::ClockTime;
use crate::error::MalformedTimeError;
use crate::prayer::PrayerName;
use crate::schedule::{DailySchedule, ScheduleEntry};
use crate::time::CivilInstant;

/// A schedule entry bound to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedInstant {
    pub name: PrayerName,
    pub clock_time: ClockTime,
    pub at: CivilInstant,
}

/// The sunrise marker bound to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSunrise {
    pub clock_time: ClockTime,
    pub at: CivilInstant,
}

/// All five prayers of one civil day, in canonical order, plus sunrise.
///
/// Providers guarantee the prayer instants are non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSchedule {
    pub prayers: [ResolvedInstant; 5],
    pub sunrise: Option<ResolvedSunrise>,
}

impl ResolvedSchedule {
    #[must_use]
    pub fn first(&self) -> &ResolvedInstant {
        &self.prayers[0]
    }

    #[must_use]
    pub fn last(&self) -> &ResolvedInstant {
        &self.prayers[self.prayers.len() - 1]
    }
}

/// Parse every clock string of `schedule` and bind it to the calendar date of
/// `reference`, with seconds and sub-seconds zeroed.
///
/// # Errors
///
/// Returns [`MalformedTimeError`] on the first entry (prayer or sunrise) that
/// does not parse; no partial result is produced.
pub fn resolve(
    schedule: &DailySchedule,
    reference: CivilInstant,
) -> Result<ResolvedSchedule, MalformedTimeError> {
    let date = reference.date();
    let bind = |entry: &ScheduleEntry| -> Result<ResolvedInstant, MalformedTimeError> {
        let clock_time: ClockTime = entry.clock_time.parse()?;
        Ok(ResolvedInstant {
            name: entry.name,
            clock_time,
            at: clock_time.on(date),
        })
    };

    let [subuh, zuhur, ashar, maghrib, isya] = schedule.entries();
    let prayers = [
        bind(subuh)?,
        bind(zuhur)?,
        bind(ashar)?,
        bind(maghrib)?,
        bind(isya)?,
    ];

    let sunrise = schedule
        .sunrise()
        .map(|raw| {
            raw.parse::<ClockTime>().map(|clock_time| ResolvedSunrise {
                clock_time,
                at: clock_time.on(date),
            })
        })
        .transpose()?;

    Ok(ResolvedSchedule { prayers, sunrise })
}
