//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `waktusolat.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::Path;

use chrono::FixedOffset;
use serde::Deserialize;
use waktusolat_domain::clock_time::ClockTime;
use waktusolat_domain::error::MalformedTimeError;
use waktusolat_domain::prayer::PrayerName;
use waktusolat_domain::schedule::DailySchedule;
use waktusolat_domain::sound::SoundPreferences;

const DEFAULT_PATH: &str = "waktusolat.toml";
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the schedule applies.
    pub location: LocationConfig,
    /// Per-prayer adhan sound toggles.
    pub sounds: SoundConfig,
    /// Schedule shown when the provider cannot be reached.
    pub fallback: FallbackScheduleConfig,
}

/// Location and civil time settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub city: String,
    pub country: String,
    /// Fixed offset of the local civil time from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

/// Sound toggle for each prayer.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub subuh: bool,
    pub zuhur: bool,
    pub ashar: bool,
    pub maghrib: bool,
    pub isya: bool,
}

/// Fallback schedule, `HH:MM` strings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FallbackScheduleConfig {
    pub subuh: String,
    pub zuhur: String,
    pub ashar: String,
    pub maghrib: String,
    pub isya: String,
    pub sunrise: Option<String>,
}

impl Config {
    /// Load configuration from `waktusolat.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_PATH)
    }

    /// Same as [`Config::load`] with an explicit file path.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WAKTUSOLAT_CITY") {
            self.location.city = val;
        }
        if let Ok(val) = std::env::var("WAKTUSOLAT_COUNTRY") {
            self.location.country = val;
        }
        if let Ok(val) = std::env::var("WAKTUSOLAT_UTC_OFFSET_MINUTES") {
            if let Ok(minutes) = val.parse() {
                self.location.utc_offset_minutes = minutes;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.location.city.trim().is_empty() {
            return Err(ConfigError::Validation("city must not be empty".to_string()));
        }
        self.utc_offset()?;
        for raw in self.fallback.times() {
            raw.parse::<ClockTime>()?;
        }
        Ok(())
    }

    /// Fixed offset of the location's civil time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the offset exceeds ±14 hours.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        let minutes = self.location.utc_offset_minutes;
        (-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)
            .contains(&minutes)
            .then(|| FixedOffset::east_opt(minutes * 60))
            .flatten()
            .ok_or_else(|| {
                ConfigError::Validation(format!("utc offset {minutes} minutes out of range"))
            })
    }

    /// Sound preferences as a domain value.
    #[must_use]
    pub fn sound_preferences(&self) -> SoundPreferences {
        let s = &self.sounds;
        [
            (PrayerName::Subuh, s.subuh),
            (PrayerName::Zuhur, s.zuhur),
            (PrayerName::Ashar, s.ashar),
            (PrayerName::Maghrib, s.maghrib),
            (PrayerName::Isya, s.isya),
        ]
        .into_iter()
        .collect()
    }

    /// Fallback schedule as a domain value.
    #[must_use]
    pub fn fallback_schedule(&self) -> DailySchedule {
        let fallback = &self.fallback;
        let schedule = DailySchedule::new([
            fallback.subuh.as_str(),
            fallback.zuhur.as_str(),
            fallback.ashar.as_str(),
            fallback.maghrib.as_str(),
            fallback.isya.as_str(),
        ]);
        match &fallback.sunrise {
            Some(sunrise) => schedule.with_sunrise(sunrise.as_str()),
            None => schedule,
        }
    }
}

impl FallbackScheduleConfig {
    fn times(&self) -> impl Iterator<Item = &str> {
        [
            &self.subuh,
            &self.zuhur,
            &self.ashar,
            &self.maghrib,
            &self.isya,
        ]
        .into_iter()
        .chain(&self.sunrise)
        .map(String::as_str)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            city: "Jakarta".to_string(),
            country: "Indonesia".to_string(),
            utc_offset_minutes: 7 * 60,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            subuh: true,
            zuhur: false,
            ashar: true,
            maghrib: false,
            isya: true,
        }
    }
}

impl Default for FallbackScheduleConfig {
    fn default() -> Self {
        Self {
            subuh: "04:43".to_string(),
            zuhur: "11:59".to_string(),
            ashar: "15:21".to_string(),
            maghrib: "17:53".to_string(),
            isya: "19:07".to_string(),
            sunrise: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A fallback clock time is malformed.
    #[error("invalid fallback schedule")]
    FallbackTime(#[from] MalformedTimeError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
