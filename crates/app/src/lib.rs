//! # waktusolat-app
//!
//! Application layer — use-cases, configuration and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ScheduleProvider` — fetch the raw schedule for a civil date
//!   - `Clock` — read the current civil time
//! - Define **use-cases**:
//!   - `PrayerBoardService` — fetch (or fall back), classify, decorate
//! - Load configuration: location, sound preferences, fallback schedule
//!
//! ## Dependency rule
//! Depends on `waktusolat-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
