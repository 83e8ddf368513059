//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::Config, error::AppResult, services::QualifyingReport};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Currently served report, replaced wholesale on reload
    report: RwLock<Arc<QualifyingReport>>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(report: QualifyingReport, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                report: RwLock::new(Arc::new(report)),
                config,
            }),
        }
    }

    /// Load the report from the configured data directory
    pub async fn load(config: Config) -> AppResult<Self> {
        let report = Self::build_report(&config).await?;
        Ok(Self::new(report, config))
    }

    /// Snapshot of the current report
    pub async fn report(&self) -> Arc<QualifyingReport> {
        self.inner.report.read().await.clone()
    }

    /// Re-read the timing files and swap in the new report
    pub async fn reload(&self) -> AppResult<Arc<QualifyingReport>> {
        let report = Arc::new(Self::build_report(&self.inner.config).await?);
        *self.inner.report.write().await = report.clone();
        Ok(report)
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    async fn build_report(config: &Config) -> AppResult<QualifyingReport> {
        let dir = config.data.dir.clone();
        let report = tokio::task::spawn_blocking(move || QualifyingReport::load(dir)).await?;
        Ok(report)
    }
}
