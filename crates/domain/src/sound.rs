//! Per-prayer adhan sound preferences, supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::classify::PrayerStatus;
use crate::prayer::PrayerName;

/// Which prayers should play a sound. Every prayer is silent by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPreferences {
    enabled: [bool; 5],
}

impl SoundPreferences {
    /// Enable or disable the sound for one prayer.
    #[must_use]
    pub fn with(mut self, name: PrayerName, enabled: bool) -> Self {
        self.enabled[name.index()] = enabled;
        self
    }

    #[must_use]
    pub fn is_enabled(&self, name: PrayerName) -> bool {
        self.enabled[name.index()]
    }

    /// Copy the preference of each prayer onto its status row.
    pub fn apply(&self, statuses: &mut [PrayerStatus]) {
        for status in statuses {
            status.has_sound = self.is_enabled(status.name);
        }
    }
}

impl FromIterator<(PrayerName, bool)> for SoundPreferences {
    fn from_iter<T: IntoIterator<Item = (PrayerName, bool)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |prefs, (name, enabled)| prefs.with(name, enabled))
    }
}
