//! Domain services for the work log. All operations are synchronous pure
//! reads or validate-then-persist mutations over the single `AppData`
//! aggregate.

pub mod auth_service;
pub mod backup_service;
pub mod calculator;
pub mod calendar;
pub mod errors;
pub mod stats;
pub mod worklog_service;

pub use auth_service::AuthService;
pub use backup_service::BackupService;
pub use calendar::{CalendarService, TaskColors};
pub use errors::{CalcError, DomainError, ImportError};
pub use stats::StatsService;
pub use worklog_service::WorklogService;
