//! Business logic services

pub mod ranking_service;
pub mod report_service;

pub use ranking_service::RankingService;
pub use report_service::QualifyingReport;
