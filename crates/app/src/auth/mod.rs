//! Authentication against the record store's auth service.

mod errors;
pub mod models;
mod service;
mod session;

pub use errors::AuthError;
pub use models::*;
pub use service::*;
pub use session::*;
