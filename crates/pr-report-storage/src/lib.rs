//! In-memory session storage for the pr-report server.
//!
//! A session binds an unguessable identifier (sent to the browser as the
//! `session_id` cookie) to the GitHub user and OAuth token obtained at login.
//!
//! Sessions live until explicit logout. There is no expiry sweep: a session
//! whose cookie expired in the browser stays in memory until the process
//! exits.
//!
//! # Example
//!
//! ```ignore
//! use pr_report_storage::{MemorySessionStore, SessionStore};
//!
//! let store = MemorySessionStore::new();
//!
//! let id = store.create(user, "gho_xxx".to_string())?;
//! assert!(store.lookup(&id)?.is_some());
//!
//! store.delete(&id)?;
//! assert!(store.lookup(&id)?.is_none());
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use pr_report_core::{Error, Result, User};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info};

/// Random bytes in a session id or OAuth state token.
pub const TOKEN_BYTES: usize = 32;

/// Generate a random token: [`TOKEN_BYTES`] bytes from the OS RNG, hex-encoded.
pub fn generate_token() -> Result<String> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::Storage(format!("Failed to generate random token: {}", e)))?;
    Ok(hex::encode(bytes))
}

/// Shorten a token for log output.
pub fn redact(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

/// An authenticated browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    /// OAuth access token used for GitHub calls made on behalf of the user
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Session storage trait.
///
/// Implementations must be safe to share between concurrent request handlers.
pub trait SessionStore: Send + Sync {
    /// Store a new session and return its identifier.
    fn create(&self, user: User, token: String) -> Result<String>;

    /// Find a session by identifier.
    ///
    /// Returns `Ok(None)` if the session doesn't exist.
    fn lookup(&self, session_id: &str) -> Result<Option<Session>>;

    /// Delete a session.
    ///
    /// Returns `Ok(())` even if the session didn't exist.
    fn delete(&self, session_id: &str) -> Result<()>;

    /// Number of live sessions.
    fn len(&self) -> Result<usize>;

    /// Whether the store holds no sessions.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

// =============================================================================
// MemorySessionStore
// =============================================================================

/// Session store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|e| Error::Storage(format!("Lock poisoned: {}", e)))
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, user: User, token: String) -> Result<String> {
        let session_id = generate_token()?;
        let session = Session {
            user,
            token,
            created_at: Utc::now(),
        };

        info!(
            login = %session.user.login,
            session = redact(&session_id),
            "Session created"
        );
        self.sessions()?.insert(session_id.clone(), session);
        Ok(session_id)
    }

    fn lookup(&self, session_id: &str) -> Result<Option<Session>> {
        let session = self.sessions()?.get(session_id).cloned();
        if session.is_none() {
            debug!(session = redact(session_id), "Session not found");
        }
        Ok(session)
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        if self.sessions()?.remove(session_id).is_some() {
            info!(session = redact(session_id), "Session deleted");
        }
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.sessions()?.len())
    }
}
