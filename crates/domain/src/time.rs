//! Time and timestamp helpers.
//!
//! Schedules are expressed in a single fixed civil time (e.g. WIB, UTC+7).
//! Instants are therefore naive local date-times; the offset is applied once,
//! when reading the wall clock.

use chrono::{FixedOffset, NaiveDateTime, Utc};

/// Civil date-time in the schedule's fixed local time.
pub type CivilInstant = NaiveDateTime;

/// Return the current civil time at the given fixed UTC offset.
#[must_use]
pub fn now_at(offset: FixedOffset) -> CivilInstant {
    Utc::now().with_timezone(&offset).naive_local()
}
