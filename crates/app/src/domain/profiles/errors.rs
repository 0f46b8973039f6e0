//! Profiles errors.

use thiserror::Error;

use crate::records::RecordStoreError;

/// Failures reading or saving profiles.
#[derive(Debug, Error)]
pub enum ProfilesError {
    #[error("nothing to update")]
    NoChanges,

    #[error("record store did not return the saved profile")]
    MissingRepresentation,

    #[error("profile storage error")]
    RecordStore(#[from] RecordStoreError),
}
