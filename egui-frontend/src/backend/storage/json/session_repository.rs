//! Session flag storage: a small YAML file holding the authenticated flag
//! so the app stays unlocked across launches. Not a security control.

use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::connection::JsonConnection;

const SESSION_FILE_NAME: &str = "session.yaml";

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    /// When the session was last changed
    pub updated_at: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            authenticated: false,
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// YAML-backed session repository
#[derive(Clone)]
pub struct SessionRepository {
    connection: JsonConnection,
}

impl SessionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn session_file_path(&self) -> PathBuf {
        self.connection.base_directory().join(SESSION_FILE_NAME)
    }

    /// Load the session, starting fresh when the file is missing or broken.
    pub fn load_or_default(&self) -> Result<Session> {
        let path = self.session_file_path();
        if !path.exists() {
            return Ok(Session::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match serde_yaml::from_str(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                debug!("Session file failed to parse ({}), starting fresh", e);
                Ok(Session::default())
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let yaml = serde_yaml::to_string(session)?;
        self.connection
            .write_atomic(&self.session_file_path(), &yaml)
    }

    /// Persist a new value of the authenticated flag.
    pub fn set_authenticated(&self, authenticated: bool) -> Result<()> {
        self.save(&Session {
            authenticated,
            updated_at: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;

    #[test]
    fn test_defaults_to_unauthenticated() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = SessionRepository::new(env.connection.clone());
        assert!(!repo.load_or_default()?.authenticated);
        Ok(())
    }

    #[test]
    fn test_flag_round_trips() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = SessionRepository::new(env.connection.clone());

        repo.set_authenticated(true)?;
        assert!(repo.load_or_default()?.authenticated);

        repo.set_authenticated(false)?;
        assert!(!repo.load_or_default()?.authenticated);
        Ok(())
    }
}
