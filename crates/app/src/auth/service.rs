//! Auth service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::{
        errors::AuthError,
        models::{AccessToken, AuthUser, Credentials, RefreshToken, Session},
    },
    records::RecordStoreConfig,
};

/// Password auth client for the record store's auth service.
#[derive(Debug, Clone)]
pub struct GoTrueAuthService {
    config: RecordStoreConfig,
    http: Client,
}

impl GoTrueAuthService {
    #[must_use]
    pub fn new(config: RecordStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/auth/v1/{path}",
            self.config.url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AuthService for GoTrueAuthService {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        let response = self
            .http
            .post(self.url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(credentials)
            .send()
            .await?;

        let session: TokenResponse = read_json(response).await?;

        info!(email = %session.user.email, "signed in");

        Ok(session.into_session(Timestamp::now()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        let response = self
            .http
            .post(self.url("signup"))
            .header("apikey", &self.config.anon_key)
            .json(credentials)
            .send()
            .await?;

        match read_json(response).await? {
            SignUpResponse::Session(session) => {
                info!(email = %session.user.email, "signed up");

                Ok(session.into_session(Timestamp::now()))
            }
            SignUpResponse::Unconfirmed(user) => {
                info!(email = %user.email, "sign-up awaiting email confirmation");

                Err(AuthError::ConfirmationRequired)
            }
        }
    }

    async fn refresh_session(&self, refresh_token: &RefreshToken) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.url("token"))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.config.anon_key)
            .json(&RefreshRequest {
                refresh_token: refresh_token.expose(),
            })
            .send()
            .await?;

        let session: TokenResponse = read_json(response).await?;

        info!(email = %session.user.email, "session refreshed");

        Ok(session.into_session(Timestamp::now()))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(session.access_token.expose())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::Rejected {
                status,
                message: error_message(&text),
            });
        }

        info!(email = %session.email(), "signed out");

        Ok(())
    }
}

/// Password auth against the record store.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Exchange `refresh_token` for a new session.
    async fn refresh_session(&self, refresh_token: &RefreshToken) -> Result<Session, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: AccessToken,
    refresh_token: RefreshToken,
    /// Unix seconds.
    #[serde(default)]
    expires_at: Option<i64>,
    /// Seconds from issue.
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self, issued_at: Timestamp) -> Session {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(seconds), _) => Timestamp::from_second(seconds).ok(),
            (None, Some(seconds)) => issued_at
                .checked_add(SignedDuration::from_secs(seconds))
                .ok(),
            (None, None) => None,
        };

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Sign-up answers with a session, or with the bare user when email
/// confirmation is enabled for the project.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    Unconfirmed(AuthUser),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn error_message(text: &str) -> String {
    let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();

    body.msg
        .or(body.error_description)
        .or(body.message)
        .or(body.error)
        .unwrap_or_else(|| text.to_string())
}

async fn read_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, AuthError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(AuthError::Rejected {
            status,
            message: error_message(&text),
        });
    }

    Ok(response.json().await?)
}
