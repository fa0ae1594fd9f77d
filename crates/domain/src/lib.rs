//! # waktusolat-domain
//!
//! Pure domain model for the waktusolat daily prayer board.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, civil timestamps
//! - Define **prayer names** in canonical order (Subuh → Isya)
//! - Define **schedules**: five `HH:MM` entries plus an optional sunrise marker
//! - **Normalize** a schedule onto the civil day of a reference instant
//! - **Classify** each prayer as current / next and format the countdown
//! - Indonesian date labels and injected per-prayer sound preferences
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! Schedule retrieval is expressed as a port trait in the `app` crate.

pub mod error;
pub mod time;

pub mod classify;
pub mod clock_time;
pub mod countdown;
pub mod date;
pub mod prayer;
pub mod resolve;
pub mod schedule;
pub mod sound;
