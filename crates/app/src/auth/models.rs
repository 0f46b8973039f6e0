//! Auth Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::uuids::TypedUuid;

/// Marker for record store auth users.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// Auth user identifier.
pub type UserUuid = TypedUuid<User>;

/// Bearer token issued by the auth service. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("AccessToken(**redacted**)")
    }
}

impl Drop for AccessToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Long-lived token exchanged for a fresh [`AccessToken`]. Wiped from memory
/// on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for RefreshToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("RefreshToken(**redacted**)")
    }
}

impl Drop for RefreshToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Access tokens this close to expiry are treated as expired.
pub const SESSION_EXPIRY_LEEWAY: SignedDuration = SignedDuration::from_secs(60);

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserUuid,
    #[serde(default)]
    pub email: String,
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    /// When `access_token` stops being accepted. Unknown for sessions saved
    /// before expiry was recorded.
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
    pub user: AuthUser,
}

impl Session {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Whether the access token has expired, or will within
    /// [`SESSION_EXPIRY_LEEWAY`], at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at.duration_since(now) <= SESSION_EXPIRY_LEEWAY)
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Email and password pair.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    fn session_expiring_at(expires_at: Option<Timestamp>) -> Session {
        Session {
            access_token: AccessToken::new("eyJhbGciOi.secret"),
            refresh_token: RefreshToken::new("refresh-secret"),
            expires_at,
            user: AuthUser {
                id: UserUuid::from_uuid(Uuid::now_v7()),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn debug_output_hides_tokens() {
        let session = session_expiring_at(None);

        let debug = format!(
            "{session:?} {:?} {:?}",
            session.access_token, session.refresh_token
        );

        assert!(!debug.contains("secret"), "tokens leaked: {debug}");
        assert!(debug.contains("ada@example.com"), "email missing: {debug}");
    }

    #[test]
    fn session_expires_within_leeway() -> TestResult {
        let now = Timestamp::from_second(1_760_000_000)?;

        let fresh = session_expiring_at(Some(now.checked_add(SignedDuration::from_secs(3600))?));
        let nearly = session_expiring_at(Some(now.checked_add(SignedDuration::from_secs(30))?));
        let past = session_expiring_at(Some(now.checked_sub(SignedDuration::from_secs(1))?));

        assert!(!fresh.is_expired(now), "an hour left is not expired");
        assert!(nearly.is_expired(now), "thirty seconds left is inside the leeway");
        assert!(past.is_expired(now), "past expiry is expired");
        assert!(
            !session_expiring_at(None).is_expired(now),
            "unknown expiry is left to the server"
        );

        Ok(())
    }

    #[test]
    fn sessions_saved_without_expiry_still_load() -> TestResult {
        let raw = r#"{
            "access_token": "jwt",
            "refresh_token": "refresh",
            "user": { "id": "0199d2a4-5d0e-7c2b-9a51-3c1f0e2b8d11", "email": "ada@example.com" }
        }"#;

        let session: Session = serde_json::from_str(raw)?;

        assert_eq!(session.expires_at, None);
        assert_eq!(session.refresh_token.expose(), "refresh");

        Ok(())
    }

    #[test]
    fn credentials_trim_email() {
        let credentials = Credentials::new("  ada@example.com ", "hunter2");

        assert_eq!(credentials.email, "ada@example.com");
        assert!(credentials.is_complete());
        assert!(!Credentials::new(" ", "hunter2").is_complete());
    }
}
