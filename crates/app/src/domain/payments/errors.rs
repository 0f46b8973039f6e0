//! Payments errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::orders::OrdersError;

/// Errors raised by the payment processor.
#[derive(Debug, Error)]
pub enum PaymentProcessorError {
    #[error("payment processor unreachable")]
    Http(#[from] reqwest::Error),

    #[error("payment processor responded with {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("payment processor response is missing {0}")]
    Incomplete(&'static str),
}

/// Errors raised by a payment sheet.
#[derive(Debug, Error)]
pub enum PaymentSheetError {
    #[error("payment sheet was presented before it was initialised")]
    NotInitialized,

    #[error("payment intent client secret is malformed")]
    InvalidClientSecret,

    #[error("payment did not complete (status {0})")]
    Failed(String),

    #[error(transparent)]
    Processor(#[from] PaymentProcessorError),
}

/// Errors raised while confirming a payment. The order stays pending.
#[derive(Debug, Error)]
pub enum ConfirmationError {
    #[error("payment sheet could not be initialised")]
    Initialization(#[source] PaymentSheetError),

    #[error("payment failed")]
    Presentation(#[source] PaymentSheetError),

    #[error("payment canceled")]
    Canceled,

    #[error("payment succeeded but the order could not be updated")]
    StatusUpdate(#[source] OrdersError),
}
