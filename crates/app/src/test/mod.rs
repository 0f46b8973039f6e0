//! Shared test fixtures.

mod fixtures;

pub(crate) use fixtures::*;
