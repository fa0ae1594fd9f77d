//! Prayer names — the five daily prayers in canonical order.

use serde::{Deserialize, Serialize};

/// One of the five obligatory daily prayers, named in Indonesian.
///
/// The variant order is the canonical daily order, so `Ord` follows the day.
/// Sunrise (*Terbit*) is deliberately absent: it only bounds the Subuh window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Subuh,
    Zuhur,
    Ashar,
    Maghrib,
    Isya,
}

impl PrayerName {
    /// All prayers in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Subuh,
        Self::Zuhur,
        Self::Ashar,
        Self::Maghrib,
        Self::Isya,
    ];

    /// Position in the canonical order (Subuh = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Indonesian display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subuh => "Subuh",
            Self::Zuhur => "Zuhur",
            Self::Ashar => "Ashar",
            Self::Maghrib => "Maghrib",
            Self::Isya => "Isya",
        }
    }

    /// Key used by international timing APIs (`Fajr`, `Dhuhr`, …).
    #[must_use]
    pub fn international_key(self) -> &'static str {
        match self {
            Self::Subuh => "Fajr",
            Self::Zuhur => "Dhuhr",
            Self::Ashar => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isya => "Isha",
        }
    }

    /// Look a prayer up by its Indonesian name or international key.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for anything else,
    /// including `Sunrise`/`Terbit`, which are not prayers.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prayer| {
            prayer.as_str().eq_ignore_ascii_case(name)
                || prayer.international_key().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_prayers_in_canonical_order() {
        for (i, prayer) in PrayerName::ALL.iter().enumerate() {
            assert_eq!(prayer.index(), i);
        }
        assert!(PrayerName::Subuh < PrayerName::Isya);
    }

    #[test]
    fn should_display_indonesian_name() {
        assert_eq!(PrayerName::Zuhur.to_string(), "Zuhur");
        assert_eq!(PrayerName::Isya.to_string(), "Isya");
    }

    #[test]
    fn should_lookup_by_international_key() {
        assert_eq!(PrayerName::lookup("Fajr"), Some(PrayerName::Subuh));
        assert_eq!(PrayerName::lookup("dhuhr"), Some(PrayerName::Zuhur));
        assert_eq!(PrayerName::lookup("Isha"), Some(PrayerName::Isya));
    }

    #[test]
    fn should_lookup_by_indonesian_name() {
        assert_eq!(PrayerName::lookup("ashar"), Some(PrayerName::Ashar));
        assert_eq!(PrayerName::lookup("Maghrib"), Some(PrayerName::Maghrib));
    }

    #[test]
    fn should_not_treat_sunrise_as_prayer() {
        assert_eq!(PrayerName::lookup("Sunrise"), None);
        assert_eq!(PrayerName::lookup("Terbit"), None);
    }

    #[test]
    fn should_serialize_as_variant_name() {
        let json = serde_json::to_string(&PrayerName::Maghrib).unwrap();
        assert_eq!(json, "\"Maghrib\"");
    }
}
