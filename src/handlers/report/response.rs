//! Report response DTOs

use serde::Serialize;

use crate::{
    constants::not_found,
    models::{DriverInfo, DriverSummary, RankedEntry, SortOrder},
};

/// Ranked report
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub order: SortOrder,
    pub drivers: Vec<RankedEntry>,
}

/// Driver list
#[derive(Debug, Serialize)]
pub struct DriversListResponse {
    pub order: SortOrder,
    pub drivers: Vec<DriverSummary>,
    pub total: usize,
}

/// Single driver details
#[derive(Debug, Serialize)]
pub struct DriverInfoResponse {
    pub driver_id: String,
    pub name: String,
    pub team: String,
    pub lap_time: String,
}

impl DriverInfoResponse {
    /// Placeholder rendered for an unknown driver code
    pub fn not_found(driver_id: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            name: not_found::NAME.to_string(),
            team: not_found::TEAM.to_string(),
            lap_time: not_found::LAP_TIME.to_string(),
        }
    }
}

impl From<DriverInfo> for DriverInfoResponse {
    fn from(info: DriverInfo) -> Self {
        Self {
            driver_id: info.code,
            name: info.name,
            team: info.team,
            lap_time: info.lap_time,
        }
    }
}
