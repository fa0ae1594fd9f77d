//! Schedule provider port — where the raw daily schedule comes from.

use std::future::Future;

use chrono::NaiveDate;
use waktusolat_domain::error::WaktuSolatError;
use waktusolat_domain::schedule::DailySchedule;

/// Source of raw daily schedules (HTTP API, bundled table, …).
///
/// Implementations translate their own response shape into a
/// [`DailySchedule`] and report transport failures as
/// [`WaktuSolatError::Provider`]. Retries are the implementation's concern.
pub trait ScheduleProvider {
    /// Fetch the schedule for one civil date.
    fn fetch_daily(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySchedule, WaktuSolatError>> + Send;
}

impl<T: ScheduleProvider + Send + Sync> ScheduleProvider for std::sync::Arc<T> {
    fn fetch_daily(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySchedule, WaktuSolatError>> + Send {
        (**self).fetch_daily(date)
    }
}
