//! # JSON Storage Module
//!
//! Single-blob JSON storage for the work log.
//!
//! ## File layout
//!
//! ```text
//! data/
//! ├── openWorkLog_data.json   ← the whole AppData aggregate
//! └── session.yaml            ← authenticated flag
//! ```
//!
//! All writes are atomic (temp file + rename), so a crash mid-save never
//! leaves a half-written blob behind.

pub mod app_data_repository;
pub mod connection;
pub mod session_repository;

#[cfg(test)]
pub mod test_utils;

pub use app_data_repository::AppDataRepository;
pub use connection::JsonConnection;
pub use session_repository::SessionRepository;
