//! Daily schedule — the raw provider record before normalization.
//!
//! Every schedule source (international timing API, local Indonesian API,
//! configured fallback) is translated by its adapter into a [`DailySchedule`].

use serde::Serialize;

use crate::prayer::PrayerName;

/// One raw `(prayer, "HH:MM")` pair as supplied by a provider.
///
/// The clock string is kept verbatim; it is validated when the schedule is
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub name: PrayerName,
    pub clock_time: String,
}

/// Five prayer entries in canonical order, plus the optional sunrise marker
/// and the provider's date label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    entries: [ScheduleEntry; 5],
    sunrise: Option<String>,
    date_label: Option<String>,
}

impl DailySchedule {
    /// Build from the five clock strings in canonical order
    /// (Subuh, Zuhur, Ashar, Maghrib, Isya).
    #[must_use]
    pub fn new(times: [impl Into<String>; 5]) -> Self {
        let mut times = times.into_iter();
        let entries = PrayerName::ALL.map(|name| ScheduleEntry {
            name,
            clock_time: times.next().map(Into::into).unwrap_or_default(),
        });
        Self {
            entries,
            sunrise: None,
            date_label: None,
        }
    }

    /// Attach the sunrise (*Terbit*) clock string.
    #[must_use]
    pub fn with_sunrise(mut self, sunrise: impl Into<String>) -> Self {
        self.sunrise = Some(sunrise.into());
        self
    }

    /// Attach the provider's date label, e.g. `"Sabtu, 19/07/2025"`.
    #[must_use]
    pub fn with_date_label(mut self, label: impl Into<String>) -> Self {
        self.date_label = Some(label.into());
        self
    }

    /// Entries in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry; 5] {
        &self.entries
    }

    /// Entry for a given prayer.
    #[must_use]
    pub fn entry(&self, name: PrayerName) -> &ScheduleEntry {
        &self.entries[name.index()]
    }

    #[must_use]
    pub fn sunrise(&self) -> Option<&str> {
        self.sunrise.as_deref()
    }

    #[must_use]
    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }
}
