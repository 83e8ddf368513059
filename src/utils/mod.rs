//! Utility functions

pub mod time;

pub use time::{format_lap_time, parse_log_timestamp};
