//! Start/end timing log grammar
//!
//! Each line is a three-letter driver code followed directly by a timestamp,
//! e.g. `SVF2018-05-24_12:02:58.917`. Anything else is skipped.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use regex::Regex;

use crate::utils::parse_log_timestamp;

static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3})(\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2}\.\d{3})")
        .expect("timing line pattern is valid")
});

/// Timestamps keyed by driver code, in first-seen order
#[derive(Debug, Default, Clone)]
pub struct TimingLog {
    pub entries: IndexMap<String, NaiveDateTime>,
    pub accepted: usize,
    pub skipped: usize,
}

/// Parse one timing line into `(code, timestamp)`
pub fn parse_timing_line(line: &str) -> Option<(&str, NaiveDateTime)> {
    let caps = TIMING_LINE.captures(line.trim())?;
    let code = caps.get(1)?.as_str();
    let timestamp = parse_log_timestamp(caps.get(2)?.as_str())?;
    Some((code, timestamp))
}

/// Parse the whole contents of a timing log
///
/// A code seen twice keeps its first position but takes the later timestamp.
pub fn parse_timing_log(contents: &str) -> TimingLog {
    let mut log = TimingLog::default();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_timing_line(line) {
            Some((code, timestamp)) => {
                log.entries.insert(code.to_string(), timestamp);
                log.accepted += 1;
            }
            None => {
                tracing::debug!(line = idx + 1, "Skipping malformed timing line");
                log.skipped += 1;
            }
        }
    }

    log
}
