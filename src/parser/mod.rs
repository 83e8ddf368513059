//! Timing log loader
//!
//! Reads `start.log`, `end.log` and `abbreviations.txt` from a data directory
//! and builds one [`ParticipantRecord`] per code found in the start log.
//!
//! Loading never fails. A source that cannot be read is logged and treated as
//! empty; malformed lines are skipped and only counted.

pub mod abbreviations;
pub mod timing;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    constants::{ABBREVIATIONS_FILE, END_LOG_FILE, START_LOG_FILE},
    error::SourceError,
    models::ParticipantRecord,
};

pub use abbreviations::{parse_abbreviations, Abbreviations, DriverDetails};
pub use timing::{parse_timing_log, TimingLog};

/// Records keyed by driver code, in start-log order
pub type ParticipantMap = IndexMap<String, ParticipantRecord>;

/// Outcome of reading one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub file: String,
    /// `false` when the file was missing or unreadable
    pub loaded: bool,
    pub accepted: usize,
    pub skipped: usize,
}

/// Diagnostics of a full load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub start: SourceStats,
    pub end: SourceStats,
    pub abbreviations: SourceStats,
    pub participants: usize,
    pub timed: usize,
    pub anomalies: usize,
}

/// Records plus the diagnostics of the load that produced them
#[derive(Debug, Clone, Default)]
pub struct ParsedSession {
    pub records: ParticipantMap,
    pub summary: LoadSummary,
}

/// Loader bound to one data directory
#[derive(Debug, Clone)]
pub struct LogParser {
    dir: PathBuf,
}

impl LogParser {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn start_log_path(&self) -> PathBuf {
        self.dir.join(START_LOG_FILE)
    }

    pub fn end_log_path(&self) -> PathBuf {
        self.dir.join(END_LOG_FILE)
    }

    pub fn abbreviations_path(&self) -> PathBuf {
        self.dir.join(ABBREVIATIONS_FILE)
    }

    /// Read all three sources and build the participant records
    pub fn load(&self) -> ParsedSession {
        let (start, start_stats) = self.read_timing(START_LOG_FILE, &self.start_log_path());
        let (end, end_stats) = self.read_timing(END_LOG_FILE, &self.end_log_path());

        let (abbreviations, abbreviation_stats) =
            match read_source(&self.abbreviations_path()) {
                Some(contents) => {
                    let parsed = parse_abbreviations(&contents);
                    let stats = SourceStats {
                        file: ABBREVIATIONS_FILE.to_string(),
                        loaded: true,
                        accepted: parsed.accepted,
                        skipped: parsed.skipped,
                    };
                    (parsed, stats)
                }
                None => (Abbreviations::default(), unloaded(ABBREVIATIONS_FILE)),
            };

        let records = apply_details(build_records(&start.entries, &end.entries), &abbreviations);

        let summary = LoadSummary {
            start: start_stats,
            end: end_stats,
            abbreviations: abbreviation_stats,
            participants: records.len(),
            timed: records.values().filter(|r| r.lap_time().is_some()).count(),
            anomalies: records.values().filter(|r| r.is_anomaly()).count(),
        };

        tracing::info!(
            dir = %self.dir.display(),
            participants = summary.participants,
            timed = summary.timed,
            anomalies = summary.anomalies,
            "Loaded timing data"
        );

        ParsedSession { records, summary }
    }

    fn read_timing(&self, file: &str, path: &Path) -> (TimingLog, SourceStats) {
        match read_source(path) {
            Some(contents) => {
                let log = parse_timing_log(&contents);
                let stats = SourceStats {
                    file: file.to_string(),
                    loaded: true,
                    accepted: log.accepted,
                    skipped: log.skipped,
                };
                (log, stats)
            }
            None => (TimingLog::default(), unloaded(file)),
        }
    }
}

fn unloaded(file: &str) -> SourceStats {
    SourceStats {
        file: file.to_string(),
        ..SourceStats::default()
    }
}

/// Read a whole source file, logging and swallowing any failure
fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(err) => {
            let err = SourceError::from_io(path, err);
            tracing::warn!(error = %err, "Timing source unavailable, treating as empty");
            None
        }
    }
}

/// Pair every start timestamp with its end timestamp, in start-log order
pub fn build_records(
    start: &IndexMap<String, NaiveDateTime>,
    end: &IndexMap<String, NaiveDateTime>,
) -> ParticipantMap {
    start
        .iter()
        .map(|(code, &start_time)| {
            let record = ParticipantRecord::new(code.clone(), start_time, end.get(code).copied());
            (code.clone(), record)
        })
        .collect()
}

/// Metadata pass: attach name and team to records whose code is known
///
/// Codes that only appear in the abbreviations file are ignored.
pub fn apply_details(records: ParticipantMap, abbreviations: &Abbreviations) -> ParticipantMap {
    records
        .into_iter()
        .map(|(code, record)| {
            let record = match abbreviations.details.get(&code) {
                Some(details) => record.with_details(&details.name, &details.team),
                None => record,
            };
            (code, record)
        })
        .collect()
}
