//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod participant;
pub mod ranking;

pub use participant::ParticipantRecord;
pub use ranking::{DriverInfo, DriverSummary, RankedEntry, SortOrder};
