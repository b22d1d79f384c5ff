//! # Storage Module
//!
//! File-based persistence for the work log. The whole `AppData` aggregate is
//! stored as one JSON blob; a small YAML file tracks the login session.

pub mod json;

pub use json::{AppDataRepository, JsonConnection, SessionRepository};
