//! Keychain-backed session persistence for CLI profiles.

use keyring::Entry;
use notas_core::auth::{AuthSession, SessionPersistence, SESSION_KEY};
use notas_core::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "notas-cli";

/// Session store backed by the OS keyring (`keyring` crate), one entry per profile.
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    username: String,
}

impl KeyringSessionStore {
    pub fn for_profile(profile_name: &str) -> Self {
        Self {
            username: format!("{SESSION_KEY}:{profile_name}"),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, &self.username)
            .map_err(|error| Error::SessionStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load_session(&self) -> Result<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SessionStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&raw)
            .map_err(|error| Error::SessionStorage(error.to_string()))
    }

    fn clear_session(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SessionStorage(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_scoped_per_profile() {
        assert_eq!(
            KeyringSessionStore::for_profile("work").username,
            "token:work"
        );
        assert_ne!(
            KeyringSessionStore::for_profile("work").username,
            KeyringSessionStore::for_profile("default").username
        );
    }
}
