//! # Backend Module
//!
//! Synchronous domain services and storage for the egui frontend. There is
//! no IO/REST layer: the UI calls these services directly, and every
//! operation completes before the frame renders.

use anyhow::Result;
use log::info;

pub mod domain;
pub mod storage;

pub use storage::json::JsonConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub worklog_service: domain::WorklogService,
    pub calendar_service: domain::CalendarService,
    pub stats_service: domain::StatsService,
    pub backup_service: domain::BackupService,
    pub auth_service: domain::AuthService,
}

impl Backend {
    /// Create a backend rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        let connection = JsonConnection::new_default()?;
        Self::with_connection(connection)
    }

    /// Create a backend over an explicit storage connection (tests use a
    /// temporary directory here).
    pub fn with_connection(connection: JsonConnection) -> Result<Self> {
        info!(
            "🗄️ Initializing backend services (data dir: {})",
            connection.base_directory().display()
        );

        Ok(Self {
            worklog_service: domain::WorklogService::new(connection.clone())?,
            calendar_service: domain::CalendarService::new(),
            stats_service: domain::StatsService::new(),
            backup_service: domain::BackupService::new(),
            auth_service: domain::AuthService::new(connection)?,
        })
    }
}
