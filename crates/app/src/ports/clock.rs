//! Clock port — the reference instant for classification.

use chrono::FixedOffset;
use waktusolat_domain::time::{self, CivilInstant};

/// Reads the current civil time of the schedule's location.
pub trait Clock {
    fn now(&self) -> CivilInstant;
}

/// Wall clock shifted to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    #[must_use]
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> CivilInstant {
        time::now_at(self.offset)
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CivilInstant);

impl Clock for FixedClock {
    fn now(&self) -> CivilInstant {
        self.0
    }
}
