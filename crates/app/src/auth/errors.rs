//! Auth errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::StorageError;

/// Failures of sign-in, sign-up and session handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("please fill in every field")]
    MissingCredentials,

    #[error("account created; confirm your email address before signing in")]
    ConfirmationRequired,

    #[error("session expired; sign in again")]
    SessionExpired,

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("auth service unreachable")]
    Http(#[from] reqwest::Error),

    #[error("session storage error")]
    Storage(#[from] StorageError),

    #[error("stored session is unreadable")]
    CorruptSession(#[source] serde_json::Error),
}
