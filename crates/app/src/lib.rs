//! Storefront client domain: cart, catalog, auth, orders, checkout and
//! payment confirmation.

pub mod auth;
pub mod context;
pub mod domain;
pub mod records;
pub mod storage;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
