//! Profiles

mod errors;
pub mod models;
mod repository;
mod service;

pub use errors::ProfilesError;
pub use repository::*;
pub use service::*;
