//! Session model, persistence seam, and credential validation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::unix_timestamp_now;
use crate::{Error, Result};

/// Fixed key the session is stored under.
pub const SESSION_KEY: &str = "token";

const MIN_PASSWORD_LENGTH: usize = 8;

/// An authenticated session issued by the notes service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer credential
    pub token: String,
    /// Email used to sign in, when known
    #[serde(default)]
    pub email: Option<String>,
    /// Unix seconds at which the session was stored
    #[serde(default)]
    pub signed_in_at: i64,
}

impl AuthSession {
    #[must_use]
    pub fn new(token: impl Into<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            email,
            signed_in_at: unix_timestamp_now(),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("email", &self.email)
            .field("signed_in_at", &self.signed_in_at)
            .finish()
    }
}

/// Storage for the session across restarts.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> Result<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

/// Key/value session store kept in process memory.
///
/// Clones share the same map. [`MemorySessionStore::global`] returns the
/// process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide store shared by every caller.
    #[must_use]
    pub fn global() -> Self {
        static GLOBAL: OnceLock<MemorySessionStore> = OnceLock::new();
        GLOBAL.get_or_init(Self::new).clone()
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|error| Error::SessionStorage(error.to_string()))?;
        Ok(f(&mut guard))
    }
}

impl SessionPersistence for MemorySessionStore {
    fn load_session(&self) -> Result<Option<AuthSession>> {
        let raw = self.with_entries(|entries| entries.get(SESSION_KEY).cloned())?;
        raw.map(|raw| serde_json::from_str(&raw).map_err(Error::from))
            .transpose()
    }

    fn save_session(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.with_entries(|entries| {
            entries.insert(SESSION_KEY.to_string(), raw);
        })
    }

    fn clear_session(&self) -> Result<()> {
        self.with_entries(|entries| {
            entries.remove(SESSION_KEY);
        })
    }
}

/// Check login credentials before contacting the service.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Check registration credentials and return the trimmed pair.
pub fn validate_registration(email: &str, password: &str) -> Result<(String, String)> {
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(Error::Validation("All fields are required".to_string()));
    }
    if !is_valid_email(email) {
        return Err(Error::Validation("Enter a valid email address".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok((email.to_string(), password.to_string()))
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex")
        })
        .is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_debug_redacts_token() {
        let session = AuthSession::new("secret-token", Some("ana@example.com".to_string()));
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("ana@example.com"));
    }

    #[test]
    fn memory_store_roundtrip_and_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load_session().unwrap().is_none());

        let session = AuthSession::new("abc", None);
        store.save_session(&session).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(session));

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemorySessionStore::new();
        let clone = store.clone();
        store.save_session(&AuthSession::new("shared", None)).unwrap();
        assert_eq!(clone.load_session().unwrap().unwrap().token, "shared");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("ana@example.com", "").is_err());
        assert!(validate_login("ana@example.com", "secret").is_ok());
    }

    #[test]
    fn registration_trims_and_validates() {
        let (email, password) =
            validate_registration("  ana@example.com ", " password1 ").unwrap();
        assert_eq!(email, "ana@example.com");
        assert_eq!(password, "password1");
    }

    #[test]
    fn registration_rejects_bad_input() {
        let cases = [
            ("", "password1", "required"),
            ("ana@example.com", "   ", "required"),
            ("not-an-email", "password1", "valid email"),
            ("ana@example", "password1", "valid email"),
            ("ana@example.com", "short", "at least 8"),
        ];
        for (email, password, expected) in cases {
            let error = validate_registration(email, password).unwrap_err();
            assert!(matches!(error, Error::Validation(_)));
            assert!(
                error.to_string().contains(expected),
                "{email:?}/{password:?} -> {error}"
            );
        }
    }
}
