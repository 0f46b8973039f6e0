//! Record store errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the record store.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request.
    #[error("record store responded with {status}: {message}")]
    Rejected { status: StatusCode, message: String },
}
