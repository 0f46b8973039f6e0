//! Payment session endpoint

pub(crate) mod errors;
pub(crate) mod handler;
pub(crate) mod models;
