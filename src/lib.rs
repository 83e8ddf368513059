//! Q1Report - Qualifying Lap Report Service
//!
//! This library reads the start and end timing logs of a qualifying session,
//! pairs them with driver metadata, and ranks drivers by lap time.
//!
//! # Features
//!
//! - Lenient log parsing (malformed lines are skipped and counted)
//! - Ascending and descending rankings with invalid laps always last
//! - Top-15 elimination cutoff
//! - JSON and plain-text reports over HTTP, reloadable on demand
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Ranking and report queries
//! - **Parser**: Timing log and metadata loading
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod parser;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ParticipantRecord, RankedEntry, SortOrder};
pub use parser::LogParser;
pub use services::{QualifyingReport, RankingService};
pub use state::AppState;
