//! Ranking views

use serde::{Deserialize, Serialize};

/// Direction of the lap time ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Fastest lap first
    #[default]
    Asc,
    /// Slowest lap first
    Desc,
}

impl SortOrder {
    /// Interpret an `order` query value; anything other than `desc` is ascending
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One row of a ranked report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// 1-based position within the returned ordering
    pub position: usize,
    pub code: String,
    pub name: String,
    pub team: String,
    /// Formatted lap time or the `NO TIME` sentinel
    pub lap_time: String,
    pub eliminated: bool,
}

/// Code, name and team of a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverSummary {
    pub code: String,
    pub name: String,
    pub team: String,
}

/// Single-driver lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverInfo {
    pub code: String,
    pub name: String,
    pub team: String,
    pub lap_time: String,
}
