//! Qualifying report queries
//!
//! [`QualifyingReport`] owns one loaded session and answers every read the
//! presentation layer needs. It is built once and never mutated; reloading
//! means building a new one.

use std::path::Path;

use crate::{
    constants::{NO_TIME, NO_TIME_LONG, REPORT_TITLE},
    models::{DriverInfo, DriverSummary, ParticipantRecord, RankedEntry, SortOrder},
    parser::{LoadSummary, LogParser, ParsedSession, ParticipantMap},
    services::RankingService,
};

/// Read-only view over a loaded qualifying session
#[derive(Debug, Clone, Default)]
pub struct QualifyingReport {
    records: ParticipantMap,
    summary: LoadSummary,
}

impl QualifyingReport {
    /// Load the timing files in `dir` and build the report
    pub fn load(dir: impl AsRef<Path>) -> Self {
        Self::from_session(LogParser::new(dir.as_ref()).load())
    }

    pub fn from_session(session: ParsedSession) -> Self {
        Self {
            records: session.records,
            summary: session.summary,
        }
    }

    /// Number of drivers in the session
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Diagnostics of the load that built this report
    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    /// Ranked drivers with positions and elimination flags
    pub fn ranked_list(&self, order: SortOrder) -> Vec<RankedEntry> {
        RankingService::rank(self.records.values(), order)
    }

    /// Every driver in start-log order
    pub fn all_participants(&self) -> Vec<DriverSummary> {
        self.records
            .values()
            .map(|record| DriverSummary {
                code: record.code.clone(),
                name: record.name.clone(),
                team: record.team.clone(),
            })
            .collect()
    }

    /// Look a driver up by code
    pub fn lookup(&self, code: &str) -> Option<DriverInfo> {
        self.records.get(code).map(driver_info)
    }

    /// Look a driver up by full name; the first match in start-log order wins
    pub fn lookup_by_name(&self, name: &str) -> Option<DriverInfo> {
        self.records
            .values()
            .find(|record| record.name == name)
            .map(driver_info)
    }

    /// Console-style report with a separator wherever advancing and eliminated
    /// drivers meet
    pub fn text_report(&self, order: SortOrder) -> String {
        let entries = self.ranked_list(order);
        let separator = format!("{}ELIMINATED{}", "-".repeat(36), "-".repeat(36));

        let mut lines = vec![REPORT_TITLE.to_string(), String::new()];
        for (idx, entry) in entries.iter().enumerate() {
            if idx > 0 && entries[idx - 1].eliminated != entry.eliminated {
                lines.push(separator.clone());
            }
            let time = if entry.lap_time == NO_TIME {
                NO_TIME_LONG
            } else {
                entry.lap_time.as_str()
            };
            lines.push(format!(
                "{}. {:<20} | {:<30} | {}",
                entry.position, entry.name, entry.team, time
            ));
        }

        lines.join("\n")
    }
}

fn driver_info(record: &ParticipantRecord) -> DriverInfo {
    DriverInfo {
        code: record.code.clone(),
        name: record.name.clone(),
        team: record.team.clone(),
        lap_time: record.lap_time_display(),
    }
}
