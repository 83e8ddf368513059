//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// INPUT FILES
// =============================================================================

/// Default directory holding the timing logs
pub const DEFAULT_DATA_DIR: &str = "./files";

/// Lap start events, one `<CODE><timestamp>` per line
pub const START_LOG_FILE: &str = "start.log";

/// Lap end events, same grammar as the start log
pub const END_LOG_FILE: &str = "end.log";

/// Driver metadata, one `<CODE>_<name>_<team>` per line
pub const ABBREVIATIONS_FILE: &str = "abbreviations.txt";

/// chrono format of the timestamp part of a log line
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.3f";

/// Field separator of the abbreviations file
pub const ABBREVIATION_SEPARATOR: char = '_';

// =============================================================================
// QUALIFYING RULES
// =============================================================================

/// Number of drivers that advance out of Q1
pub const ELIMINATION_CUTOFF: usize = 15;

/// Lap time shown when no valid duration exists
pub const NO_TIME: &str = "NO TIME";

/// Lap time shown by the text report when no valid duration exists
pub const NO_TIME_LONG: &str = "NO TIME COULD BE DETERMINED BASED ON INPUT FILES";

/// Title line of the text report
pub const REPORT_TITLE: &str = "Formula 1 - Qualifying Q1 Results";

// =============================================================================
// NOT-FOUND PLACEHOLDER
// =============================================================================

/// Lookup placeholders rendered for an unknown driver code
pub mod not_found {
    pub const NAME: &str = "Not Found";
    pub const TEAM: &str = "N/A";
    pub const LAP_TIME: &str = "N/A";
}
