//! Time utilities

use chrono::{NaiveDateTime, TimeDelta};

use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Parse the timestamp part of a timing log line (`2018-05-24_12:02:58.917`)
pub fn parse_log_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, LOG_TIMESTAMP_FORMAT).ok()
}

/// Format a lap duration as `H:MM:SS.ffffff`
///
/// The fractional part is omitted when it is zero (`0:01:13`).
pub fn format_lap_time(duration: TimeDelta) -> String {
    let total_micros = duration.num_microseconds().unwrap_or(i64::MAX).max(0);

    let micros = total_micros % 1_000_000;
    let total_seconds = total_micros / 1_000_000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
    }
}
