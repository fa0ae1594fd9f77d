//! Classifier — marks the current and next prayer and attaches the countdown.
//!
//! Windows are half-open: a prayer is current from its own instant
//! (inclusive) until the following prayer's instant (exclusive). Subuh ends at
//! sunrise instead when a sunrise marker is known, and Isya stays current
//! until the civil day rolls over. After Isya the next prayer is tomorrow's
//! Subuh.

use chrono::Days;
use serde::Serialize;

use crate::clock_time::ClockTime;
use crate::countdown::format_countdown;
use crate::error::{InternalConsistencyError, WaktuSolatError};
use crate::prayer::PrayerName;
use crate::resolve::{ResolvedInstant, ResolvedSchedule, resolve};
use crate::schedule::DailySchedule;
use crate::time::CivilInstant;

/// Display row for one prayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerStatus {
    pub name: PrayerName,
    pub clock_time: ClockTime,
    pub is_current: bool,
    pub is_next: bool,
    /// Countdown such as `"Dalam 1 jam 15 menit"`; only on the next prayer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_until: Option<String>,
    /// `"Sampai HH:MM"` while Subuh is current and bounded by sunrise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_info: Option<String>,
    pub has_sound: bool,
}

impl PrayerStatus {
    fn idle(prayer: &ResolvedInstant) -> Self {
        Self {
            name: prayer.name,
            clock_time: prayer.clock_time,
            is_current: false,
            is_next: false,
            time_until: None,
            auxiliary_info: None,
            has_sound: false,
        }
    }
}

/// Where the current-window of a prayer ends.
#[derive(Debug, Clone, Copy)]
enum WindowEnd {
    Sunrise(ClockTime, CivilInstant),
    NextPrayer(CivilInstant),
    EndOfDay,
}

fn window_end(resolved: &ResolvedSchedule, index: usize) -> WindowEnd {
    match (index, resolved.sunrise, resolved.prayers.get(index + 1)) {
        (0, Some(sunrise), _) => WindowEnd::Sunrise(sunrise.clock_time, sunrise.at),
        (_, _, Some(following)) => WindowEnd::NextPrayer(following.at),
        (_, _, None) => WindowEnd::EndOfDay,
    }
}

/// Sunrise must lie within `Subuh ..= Zuhur`, otherwise the Subuh window
/// either swallows Zuhur or leaves the morning without a current prayer.
fn check_sunrise(resolved: &ResolvedSchedule) -> Result<(), InternalConsistencyError> {
    let Some(sunrise) = resolved.sunrise else {
        return Ok(());
    };
    let subuh = resolved.first();
    let zuhur = &resolved.prayers[PrayerName::Zuhur.index()];
    if subuh.at <= sunrise.at && sunrise.at <= zuhur.at {
        return Ok(());
    }
    Err(InternalConsistencyError::SunriseOutOfOrder {
        sunrise: sunrise.clock_time,
        subuh: subuh.clock_time,
        zuhur: zuhur.clock_time,
    })
}

/// Classify every prayer of `resolved` relative to `reference`.
///
/// # Errors
///
/// Returns [`InternalConsistencyError`] when the schedule is not monotonic
/// enough to identify a single current prayer or an upcoming prayer, or when
/// sunrise is not between Subuh and Zuhur.
pub fn classify(
    resolved: &ResolvedSchedule,
    reference: CivilInstant,
) -> Result<[PrayerStatus; 5], InternalConsistencyError> {
    check_sunrise(resolved)?;

    let mut statuses = resolved.prayers.map(|prayer| PrayerStatus::idle(&prayer));
    let mut current: Option<PrayerName> = None;

    for (index, prayer) in resolved.prayers.iter().enumerate() {
        let started = prayer.at <= reference;
        let (is_current, auxiliary_info) = match window_end(resolved, index) {
            WindowEnd::Sunrise(clock_time, end) => {
                let inside = started && reference < end;
                (inside, inside.then(|| format!("Sampai {clock_time}")))
            }
            WindowEnd::NextPrayer(end) => (started && reference < end, None),
            WindowEnd::EndOfDay => (started, None),
        };
        if !is_current {
            continue;
        }
        if let Some(first) = current {
            return Err(InternalConsistencyError::OverlappingWindows {
                first,
                second: prayer.name,
            });
        }
        current = Some(prayer.name);
        statuses[index].is_current = true;
        statuses[index].auxiliary_info = auxiliary_info;
    }

    let is_after_last = reference >= resolved.last().at;
    let (next_index, next_at) = if is_after_last {
        let tomorrow = resolved
            .first()
            .at
            .checked_add_days(Days::new(1))
            .ok_or(InternalConsistencyError::NoNextPrayer)?;
        (0, tomorrow)
    } else {
        resolved
            .prayers
            .iter()
            .enumerate()
            .find(|(_, prayer)| prayer.at > reference)
            .map(|(index, prayer)| (index, prayer.at))
            .ok_or(InternalConsistencyError::NoNextPrayer)?
    };

    let next = &mut statuses[next_index];
    next.is_next = true;
    next.time_until = format_countdown(next_at - reference);

    Ok(statuses)
}

/// Resolve `schedule` onto the civil day of `reference` and classify it.
///
/// # Errors
///
/// Returns [`WaktuSolatError::MalformedTime`] if any clock string is invalid
/// (no partial result), or [`WaktuSolatError::InternalConsistency`] from
/// [`classify`].
pub fn classify_schedule(
    schedule: &DailySchedule,
    reference: CivilInstant,
) -> Result<[PrayerStatus; 5], WaktuSolatError> {
    let resolved = resolve(schedule, reference)?;
    Ok(classify(&resolved, reference)?)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;

    fn at(h: u32, m: u32) -> CivilInstant {
        NaiveDate::from_ymd_opt(2025, 7, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn schedule() -> DailySchedule {
        DailySchedule::new(["04:30", "12:00", "15:15", "18:00", "19:15"])
    }

    fn with_sunrise() -> DailySchedule {
        schedule().with_sunrise("05:45")
    }

    fn run(schedule: &DailySchedule, reference: CivilInstant) -> [PrayerStatus; 5] {
        classify_schedule(schedule, reference).unwrap()
    }

    fn current(rows: &[PrayerStatus]) -> Vec<PrayerName> {
        rows.iter().filter(|r| r.is_current).map(|r| r.name).collect()
    }

    fn next(rows: &[PrayerStatus]) -> Vec<PrayerName> {
        rows.iter().filter(|r| r.is_next).map(|r| r.name).collect()
    }

    fn row(rows: &[PrayerStatus], name: PrayerName) -> &PrayerStatus {
        &rows[name.index()]
    }

    #[test]
    fn should_mark_subuh_current_until_sunrise() {
        let rows = run(&with_sunrise(), at(5, 0));
        let subuh = row(&rows, PrayerName::Subuh);
        assert!(subuh.is_current);
        assert_eq!(subuh.auxiliary_info.as_deref(), Some("Sampai 05:45"));

        let zuhur = row(&rows, PrayerName::Zuhur);
        assert!(zuhur.is_next);
        assert_eq!(zuhur.time_until.as_deref(), Some("Dalam 7 jam"));
    }

    #[test]
    fn should_roll_over_to_tomorrows_subuh_after_isya() {
        let rows = run(&with_sunrise(), at(20, 0));
        assert_eq!(current(&rows), vec![PrayerName::Isya]);
        let subuh = row(&rows, PrayerName::Subuh);
        assert!(subuh.is_next);
        assert_eq!(subuh.time_until.as_deref(), Some("Dalam 8 jam 30 menit"));
    }

    #[test]
    fn should_mark_prayer_current_at_its_exact_instant() {
        let rows = run(&schedule(), at(18, 0));
        assert!(row(&rows, PrayerName::Maghrib).is_current);
        assert!(!row(&rows, PrayerName::Ashar).is_current);
        assert!(row(&rows, PrayerName::Isya).is_next);
        assert_eq!(
            row(&rows, PrayerName::Isya).time_until.as_deref(),
            Some("Dalam 1 jam 15 menit")
        );
    }

    #[test]
    fn should_have_no_current_before_first_prayer() {
        let rows = run(&schedule(), at(3, 0));
        assert!(current(&rows).is_empty());
        assert_eq!(next(&rows), vec![PrayerName::Subuh]);
        assert_eq!(
            row(&rows, PrayerName::Subuh).time_until.as_deref(),
            Some("Dalam 1 jam 30 menit")
        );
    }

    #[test]
    fn should_have_no_current_between_sunrise_and_zuhur() {
        let rows = run(&with_sunrise(), at(9, 0));
        assert!(current(&rows).is_empty());
        assert_eq!(next(&rows), vec![PrayerName::Zuhur]);
        assert!(row(&rows, PrayerName::Subuh).auxiliary_info.is_none());
    }

    #[test]
    fn should_end_subuh_at_sunrise_exclusive() {
        let rows = run(&with_sunrise(), at(5, 45));
        assert!(!row(&rows, PrayerName::Subuh).is_current);
    }

    #[test]
    fn should_keep_subuh_current_until_zuhur_without_sunrise() {
        let rows = run(&schedule(), at(9, 0));
        let subuh = row(&rows, PrayerName::Subuh);
        assert!(subuh.is_current);
        assert!(subuh.auxiliary_info.is_none());
    }

    #[test]
    fn should_attach_countdown_only_to_next_prayer() {
        let rows = run(&schedule(), at(13, 20));
        for status in &rows {
            assert_eq!(status.time_until.is_some(), status.is_next, "{}", status.name);
        }
        assert_eq!(
            row(&rows, PrayerName::Ashar).time_until.as_deref(),
            Some("Dalam 1 jam 55 menit")
        );
    }

    #[test]
    fn should_round_countdown_with_seconds_in_reference() {
        let reference = at(17, 30) + TimeDelta::seconds(30);
        let rows = run(&schedule(), reference);
        // 29m30s rounds up.
        assert_eq!(
            row(&rows, PrayerName::Maghrib).time_until.as_deref(),
            Some("Dalam 30 menit")
        );
    }

    #[test]
    fn should_keep_isya_current_until_midnight() {
        let reference = at(23, 59) + TimeDelta::seconds(59);
        let rows = run(&schedule(), reference);
        assert_eq!(current(&rows), vec![PrayerName::Isya]);
        assert_eq!(
            row(&rows, PrayerName::Subuh).time_until.as_deref(),
            Some("Dalam 4 jam 30 menit")
        );
    }

    #[test]
    fn should_skip_empty_window_when_prayers_share_an_instant() {
        let schedule = DailySchedule::new(["04:30", "12:00", "18:00", "18:00", "19:15"]);
        let rows = run(&schedule, at(18, 0));
        assert_eq!(current(&rows), vec![PrayerName::Maghrib]);
        assert_eq!(next(&rows), vec![PrayerName::Isya]);
    }

    #[test]
    fn should_reject_overlapping_windows() {
        let schedule = DailySchedule::new(["04:30", "12:00", "15:15", "18:00", "11:00"]);
        let err = classify_schedule(&schedule, at(13, 0)).unwrap_err();
        assert!(matches!(
            err,
            WaktuSolatError::InternalConsistency(InternalConsistencyError::OverlappingWindows {
                first: PrayerName::Zuhur,
                second: PrayerName::Isya,
            })
        ));
    }

    #[test]
    fn should_reject_sunrise_before_subuh() {
        let schedule = schedule().with_sunrise("04:00");
        let err = classify_schedule(&schedule, at(4, 40)).unwrap_err();
        assert!(matches!(
            err,
            WaktuSolatError::InternalConsistency(InternalConsistencyError::SunriseOutOfOrder {
                sunrise,
                ..
            }) if sunrise.to_string() == "04:00"
        ));
    }

    #[test]
    fn should_reject_sunrise_after_zuhur() {
        let schedule = schedule().with_sunrise("13:00");
        let err = classify_schedule(&schedule, at(12, 30)).unwrap_err();
        assert!(matches!(
            err,
            WaktuSolatError::InternalConsistency(InternalConsistencyError::SunriseOutOfOrder {
                zuhur,
                ..
            }) if zuhur.to_string() == "12:00"
        ));
    }

    #[test]
    fn should_accept_sunrise_on_window_bounds() {
        let at_subuh = run(&schedule().with_sunrise("04:30"), at(4, 30));
        assert!(current(&at_subuh).is_empty());
        assert_eq!(next(&at_subuh), vec![PrayerName::Zuhur]);

        let at_zuhur = run(&schedule().with_sunrise("12:00"), at(11, 0));
        assert_eq!(current(&at_zuhur), vec![PrayerName::Subuh]);
    }

    #[test]
    fn should_abort_on_malformed_time() {
        let schedule = DailySchedule::new(["04:30", "12:00", "15:15", "18:00", "7pm"]);
        let err = classify_schedule(&schedule, at(13, 0)).unwrap_err();
        assert!(matches!(err, WaktuSolatError::MalformedTime(_)));
    }

    #[test]
    fn should_hold_flag_invariants_for_every_minute_of_the_day() {
        let schedule = with_sunrise();
        let subuh = at(4, 30);
        let sunrise = at(5, 45);
        let zuhur = at(12, 0);

        for minute in 0..24 * 60 {
            let reference = at(0, 0) + TimeDelta::minutes(minute);
            let rows = run(&schedule, reference);

            assert_eq!(next(&rows).len(), 1, "at {reference}");
            let expected_current =
                usize::from(!(reference < subuh || (sunrise <= reference && reference < zuhur)));
            assert_eq!(current(&rows).len(), expected_current, "at {reference}");
            for status in &rows {
                assert_eq!(status.time_until.is_some(), status.is_next, "at {reference}");
            }
        }
    }

    #[test]
    fn should_serialize_without_empty_optionals() {
        let rows = run(&schedule(), at(13, 0));
        let json = serde_json::to_value(row(&rows, PrayerName::Subuh)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Subuh",
                "clock_time": "04:30",
                "is_current": false,
                "is_next": false,
                "has_sound": false
            })
        );
    }
}
