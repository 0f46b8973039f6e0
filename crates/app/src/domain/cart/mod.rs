//! Cart

pub mod errors;
pub mod models;
mod store;

pub use errors::CartError;
pub use store::*;
