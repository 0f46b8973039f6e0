//! Product catalog

pub mod errors;
pub mod filters;
pub mod models;
pub mod service;

pub use errors::CatalogError;
pub use service::*;
