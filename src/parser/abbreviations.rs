//! Driver metadata grammar (`SVF_Sebastian Vettel_FERRARI`)

use std::collections::HashMap;

use crate::constants::ABBREVIATION_SEPARATOR;

/// Name and team of one driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDetails {
    pub name: String,
    pub team: String,
}

/// Driver details keyed by code
#[derive(Debug, Default, Clone)]
pub struct Abbreviations {
    pub details: HashMap<String, DriverDetails>,
    pub accepted: usize,
    pub skipped: usize,
}

/// Split a metadata line into `(code, details)`; exactly three fields are required
pub fn parse_abbreviation_line(line: &str) -> Option<(&str, DriverDetails)> {
    let mut fields = line.trim().split(ABBREVIATION_SEPARATOR);
    let (code, name, team) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    Some((
        code,
        DriverDetails {
            name: name.to_string(),
            team: team.to_string(),
        },
    ))
}

/// Parse the whole abbreviations file; a repeated code keeps the later details
pub fn parse_abbreviations(contents: &str) -> Abbreviations {
    let mut abbreviations = Abbreviations::default();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_abbreviation_line(line) {
            Some((code, details)) => {
                abbreviations.details.insert(code.to_string(), details);
                abbreviations.accepted += 1;
            }
            None => {
                tracing::debug!(line = idx + 1, "Skipping malformed abbreviation line");
                abbreviations.skipped += 1;
            }
        }
    }

    abbreviations
}
