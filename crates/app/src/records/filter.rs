//! Row filters and ordering.

use std::fmt::Display;

/// A single `column=op.value` row filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    expression: String,
}

impl Filter {
    /// Match rows whose `column` equals `value`.
    pub fn eq(column: &'static str, value: impl Display) -> Self {
        Self {
            column,
            expression: format!("eq.{value}"),
        }
    }

    pub(crate) fn as_query_pair(&self) -> (&str, &str) {
        (self.column, &self.expression)
    }
}

/// Result ordering on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Ascending(&'static str),
    Descending(&'static str),
}

impl Ordering {
    pub(crate) fn as_query_value(self) -> String {
        match self {
            Self::Ascending(column) => format!("{column}.asc"),
            Self::Descending(column) => format!("{column}.desc"),
        }
    }
}
