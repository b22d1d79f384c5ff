//! Login gate. A single shared password compared against a fixed constant,
//! persisting an authenticated flag so the app stays unlocked across
//! launches. Gates UI rendering only; explicitly not a security boundary.

use anyhow::Result;
use log::info;

use crate::backend::storage::json::{JsonConnection, SessionRepository};

const APP_PASSWORD: &str = "1234";

/// Authentication service backed by the session file
pub struct AuthService {
    session_repository: SessionRepository,
    authenticated: bool,
}

impl AuthService {
    pub fn new(connection: JsonConnection) -> Result<Self> {
        let session_repository = SessionRepository::new(connection);
        let authenticated = session_repository.load_or_default()?.authenticated;
        Ok(Self {
            session_repository,
            authenticated,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Succeeds iff `password` equals the fixed constant; persists the flag.
    pub fn login(&mut self, password: &str) -> Result<bool> {
        if password == APP_PASSWORD {
            self.authenticated = true;
            self.session_repository.set_authenticated(true)?;
            info!("🔓 Login succeeded");
            Ok(true)
        } else {
            info!("🔒 Login rejected");
            Ok(false)
        }
    }

    pub fn logout(&mut self) -> Result<()> {
        self.authenticated = false;
        self.session_repository.set_authenticated(false)?;
        info!("🔒 Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;

    #[test]
    fn test_login_with_correct_password() -> Result<()> {
        let env = TestEnvironment::new()?;
        let mut auth = AuthService::new(env.connection.clone())?;

        assert!(!auth.is_authenticated());
        assert!(auth.login("1234")?);
        assert!(auth.is_authenticated());
        Ok(())
    }

    #[test]
    fn test_login_with_wrong_password() -> Result<()> {
        let env = TestEnvironment::new()?;
        let mut auth = AuthService::new(env.connection.clone())?;

        assert!(!auth.login("4321")?);
        assert!(!auth.is_authenticated());
        Ok(())
    }

    #[test]
    fn test_session_persists_across_instances() -> Result<()> {
        let env = TestEnvironment::new()?;

        let mut auth = AuthService::new(env.connection.clone())?;
        auth.login("1234")?;

        let reloaded = AuthService::new(env.connection.clone())?;
        assert!(reloaded.is_authenticated());
        Ok(())
    }

    #[test]
    fn test_logout_clears_flag() -> Result<()> {
        let env = TestEnvironment::new()?;
        let mut auth = AuthService::new(env.connection.clone())?;
        auth.login("1234")?;
        auth.logout()?;

        assert!(!auth.is_authenticated());
        let reloaded = AuthService::new(env.connection.clone())?;
        assert!(!reloaded.is_authenticated());
        Ok(())
    }
}
