//! Participant lap record

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{constants::NO_TIME, utils::format_lap_time};

/// One driver's qualifying lap as read from the timing logs
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantRecord {
    /// Three-letter driver code, unique per session
    pub code: String,
    pub start_time: NaiveDateTime,
    /// Absent when the driver never appeared in the end log
    pub end_time: Option<NaiveDateTime>,
    pub name: String,
    pub team: String,
}

impl ParticipantRecord {
    /// Create a record without driver details
    pub fn new(
        code: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            code: code.into(),
            start_time,
            end_time,
            name: String::new(),
            team: String::new(),
        }
    }

    /// Same record carrying the driver's name and team
    pub fn with_details(self, name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            ..self
        }
    }

    /// Elapsed lap time, `None` when the end is missing or precedes the start
    pub fn lap_time(&self) -> Option<TimeDelta> {
        let end = self.end_time?;
        (end >= self.start_time).then(|| end - self.start_time)
    }

    /// Lap time formatted for display, or the `NO TIME` sentinel
    pub fn lap_time_display(&self) -> String {
        self.lap_time()
            .map(format_lap_time)
            .unwrap_or_else(|| NO_TIME.to_string())
    }

    /// End time recorded before the start time
    pub fn is_anomaly(&self) -> bool {
        self.end_time.is_some_and(|end| end < self.start_time)
    }
}
