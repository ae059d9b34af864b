//! Card domain errors

use core_kernel::{CalendarError, MoneyError};
use thiserror::Error;

/// Errors that can occur in the card domain
#[derive(Debug, Error)]
pub enum CardError {
    /// Card configuration outside the supported ranges
    #[error("Invalid card configuration: {0}")]
    InvalidConfig(String),

    /// Installment plan parameters that cannot produce a valid group
    #[error("Invalid installment plan: {0}")]
    InvalidPlan(String),

    /// Calendar error
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Money error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl CardError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CardError::InvalidConfig(message.into())
    }

    pub fn invalid_plan(message: impl Into<String>) -> Self {
        CardError::InvalidPlan(message.into())
    }
}
