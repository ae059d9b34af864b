//! Card configuration
//!
//! A card's billing behavior is fully described by two nominal days of
//! month (closing and due) and a credit limit. The days are nominal: a
//! month shorter than the configured day closes or falls due on its last
//! day instead.

use core_kernel::{CardId, Money};
use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Minimum number of days a card must leave between closing and due days
pub const MIN_CLOSING_DUE_GAP_DAYS: u32 = 5;

/// Billing configuration of one credit card
///
/// Immutable for the duration of a cycle computation; edits create a new
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub card_id: CardId,
    /// Nominal day-of-month after which new charges roll to the next statement
    pub closing_day: u32,
    /// Nominal day-of-month a statement's payment is owed
    pub due_day: u32,
    pub credit_limit: Money,
}

impl CardConfig {
    /// Creates a new card configuration
    ///
    /// The value is not validated on construction; call [`validate`](Self::validate)
    /// before handing it to the resolvers.
    pub fn new(card_id: CardId, closing_day: u32, due_day: u32, credit_limit: Money) -> Self {
        Self {
            card_id,
            closing_day,
            due_day,
            credit_limit,
        }
    }

    /// Checks day ranges and the closing/due gap
    pub fn validate(&self) -> Result<(), CardError> {
        self.ensure_days_in_range()?;

        let gap = self.closing_due_gap();
        if gap < MIN_CLOSING_DUE_GAP_DAYS {
            return Err(CardError::invalid_config(format!(
                "closing day {} and due day {} are only {} days apart (minimum {})",
                self.closing_day, self.due_day, gap, MIN_CLOSING_DUE_GAP_DAYS
            )));
        }
        Ok(())
    }

    /// Days between the closing day and the due day
    ///
    /// When the due day wraps into the month after the closing day, the gap
    /// is measured against a fixed 30-day month regardless of the actual
    /// closing month's length, so configs closing on the 29th-31st gain or
    /// lose a day here.
    pub fn closing_due_gap(&self) -> u32 {
        if self.due_day > self.closing_day {
            self.due_day - self.closing_day
        } else {
            30 + self.due_day - self.closing_day
        }
    }

    /// Checks that both configured days are nominal calendar days (1-31)
    pub(crate) fn ensure_days_in_range(&self) -> Result<(), CardError> {
        for (name, value) in [("closing_day", self.closing_day), ("due_day", self.due_day)] {
            if !(1..=31).contains(&value) {
                return Err(CardError::invalid_config(format!(
                    "{name} must be between 1 and 31, got {value}"
                )));
            }
        }
        Ok(())
    }
}
