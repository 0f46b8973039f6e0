//! Remote record store.
//!
//! The hosted backend exposes each table as a PostgREST resource under
//! `{url}/rest/v1/{table}`. Requests carry the project's anonymous key plus the
//! signed-in user's access token, and row filters are passed as query
//! parameters of the form `column=eq.value`. Typed repositories build on
//! [`RecordStoreClient`]; nothing outside them talks to the store directly.

mod client;
mod errors;
mod filter;

pub use client::{RecordStoreClient, RecordStoreConfig};
pub use errors::RecordStoreError;
pub use filter::{Filter, Ordering};
