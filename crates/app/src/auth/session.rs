//! Persisted session.

use jiff::Timestamp;
use tracing::{debug, warn};

use crate::{
    auth::{errors::AuthError, models::Session, service::AuthService},
    storage::LocalStorage,
};

/// Storage namespace holding the signed-in session.
pub const SESSION_STORAGE_KEY: &str = "auth-session";

/// Keeps the signed-in session across process restarts.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: LocalStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be read or the stored session is
    /// unreadable.
    pub fn check_session(&self) -> Result<Option<Session>, AuthError> {
        self.storage
            .get_item(SESSION_STORAGE_KEY)?
            .map(|raw| serde_json::from_str(&raw).map_err(AuthError::CorruptSession))
            .transpose()
    }

    /// Restore the persisted session, refreshing it first when its access
    /// token has expired at `now`.
    ///
    /// A refresh token the auth service rejects clears the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionExpired`] when the session could not be
    /// refreshed, or any storage or transport error.
    pub async fn restore(
        &mut self,
        auth: &dyn AuthService,
        now: Timestamp,
    ) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.check_session()? else {
            return Ok(None);
        };

        if !session.is_expired(now) {
            return Ok(Some(session));
        }

        match auth.refresh_session(&session.refresh_token).await {
            Ok(refreshed) => {
                self.save(&refreshed)?;

                Ok(Some(refreshed))
            }
            Err(AuthError::Rejected { status, message }) => {
                warn!(%status, %message, email = %session.email(), "refresh token rejected");

                self.clear()?;

                Err(AuthError::SessionExpired)
            }
            Err(error) => Err(error),
        }
    }

    /// Persist `session`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be written.
    pub fn save(&mut self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session).map_err(AuthError::CorruptSession)?;

        self.storage.set_item(SESSION_STORAGE_KEY, &raw)?;

        debug!(email = %session.email(), "session persisted");

        Ok(())
    }

    /// Forget the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be written.
    pub fn clear(&mut self) -> Result<(), AuthError> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;

        Ok(())
    }
}
