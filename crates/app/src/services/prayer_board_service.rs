//! Prayer board service — the daily schedule as the display layer sees it.

use serde::Serialize;
use waktusolat_domain::classify::{PrayerStatus, classify_schedule};
use waktusolat_domain::date::{format_indonesian_date, format_localized_date};
use waktusolat_domain::error::WaktuSolatError;
use waktusolat_domain::schedule::DailySchedule;
use waktusolat_domain::sound::SoundPreferences;
use waktusolat_domain::time::CivilInstant;

use crate::config::{Config, ConfigError};
use crate::ports::{Clock, ScheduleProvider, SystemClock};

/// Where the classified schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    Provider,
    Fallback,
}

/// Everything the display layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerBoard {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Indonesian date, e.g. `"Sabtu, 19 Juli 2025"`.
    pub date_label: String,
    pub source: ScheduleSource,
    pub prayers: [PrayerStatus; 5],
}

impl PrayerBoard {
    /// The prayer whose window contains the reference instant, if any.
    #[must_use]
    pub fn current(&self) -> Option<&PrayerStatus> {
        self.prayers.iter().find(|p| p.is_current)
    }

    /// The upcoming prayer.
    #[must_use]
    pub fn next(&self) -> Option<&PrayerStatus> {
        self.prayers.iter().find(|p| p.is_next)
    }
}

/// Builds [`PrayerBoard`]s from a schedule provider and a clock.
pub struct PrayerBoardService<P, C> {
    provider: P,
    clock: C,
    location: String,
    country: Option<String>,
    sounds: SoundPreferences,
    fallback: Option<DailySchedule>,
}

impl<P: ScheduleProvider, C: Clock> PrayerBoardService<P, C> {
    /// Create a service with every sound off and no fallback schedule.
    pub fn new(provider: P, clock: C, location: impl Into<String>) -> Self {
        Self {
            provider,
            clock,
            location: location.into(),
            country: None,
            sounds: SoundPreferences::default(),
            fallback: None,
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_sounds(mut self, sounds: SoundPreferences) -> Self {
        self.sounds = sounds;
        self
    }

    /// Schedule to classify when the provider fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: DailySchedule) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Build the board for the clock's current instant.
    ///
    /// # Errors
    ///
    /// See [`PrayerBoardService::board_at`].
    pub async fn board(&self) -> Result<PrayerBoard, WaktuSolatError> {
        self.board_at(self.clock.now()).await
    }

    /// Build the board for an explicit reference instant.
    ///
    /// # Errors
    ///
    /// Returns [`WaktuSolatError::Provider`] when the provider fails and no
    /// fallback is configured, [`WaktuSolatError::MalformedTime`] or
    /// [`WaktuSolatError::MalformedDate`] when the schedule is malformed, and
    /// [`WaktuSolatError::InternalConsistency`] when it is not monotonic.
    #[tracing::instrument(skip(self), fields(location = %self.location))]
    pub async fn board_at(&self, reference: CivilInstant) -> Result<PrayerBoard, WaktuSolatError> {
        let (schedule, source) = self.fetch(reference).await?;

        let mut prayers = classify_schedule(&schedule, reference)?;
        self.sounds.apply(&mut prayers);

        let date_label = match schedule.date_label() {
            Some(label) => format_localized_date(label)?,
            None => format_indonesian_date(reference.date()),
        };

        let board = PrayerBoard {
            location: self.location.clone(),
            country: self.country.clone(),
            date_label,
            source,
            prayers,
        };
        tracing::debug!(
            current = ?board.current().map(|p| p.name),
            next = ?board.next().map(|p| p.name),
            time_until = ?board.next().and_then(|p| p.time_until.as_deref()),
            ?source,
            "classified prayer schedule"
        );
        Ok(board)
    }

    async fn fetch(
        &self,
        reference: CivilInstant,
    ) -> Result<(DailySchedule, ScheduleSource), WaktuSolatError> {
        match self.provider.fetch_daily(reference.date()).await {
            Ok(schedule) => Ok((schedule, ScheduleSource::Provider)),
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %err, "schedule provider failed, using fallback schedule");
                    Ok((fallback.clone(), ScheduleSource::Fallback))
                }
                None => Err(err),
            },
        }
    }
}

impl<P: ScheduleProvider> PrayerBoardService<P, SystemClock> {
    /// Wire a service from configuration, reading the wall clock at the
    /// configured offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the configured offset is invalid.
    pub fn from_config(provider: P, config: &Config) -> Result<Self, ConfigError> {
        let clock = SystemClock::new(config.utc_offset()?);
        Ok(Self::new(provider, clock, config.location.city.clone())
            .with_country(config.location.country.clone())
            .with_sounds(config.sound_preferences())
            .with_fallback(config.fallback_schedule()))
    }
}
