//! Statement cycle resolution
//!
//! Maps a purchase date onto the statement that bills it. A purchase after
//! the closing day misses the current cycle and rolls into the next one;
//! a due day on or before the closing day falls due in the month after the
//! statement closes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::calendar::{add_months, clamp_day};

use crate::card::CardConfig;
use crate::error::CardError;

/// The statement a charge belongs to: when it closes and when it is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementCycle {
    pub closing_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Resolves the statement cycle billing a purchase made on `purchase_date`
///
/// Fails with [`CardError::InvalidConfig`] when either configured day is
/// outside 1-31. Nominal days past the end of a short month are clamped to
/// the month's last day; that is accepted policy, not an error.
pub fn resolve(config: &CardConfig, purchase_date: NaiveDate) -> Result<StatementCycle, CardError> {
    config.ensure_days_in_range()?;

    // A purchase on the closing day itself still makes the current cycle.
    let (closing_year, closing_month) = if purchase_date.day() > config.closing_day {
        add_months(purchase_date.year(), purchase_date.month(), 1)
    } else {
        (purchase_date.year(), purchase_date.month())
    };
    let closing_date = clamp_day(closing_year, closing_month, config.closing_day)?;

    // Equal days mean next month: a statement is never due on or before
    // the day it closes.
    let (due_year, due_month) = if config.due_day <= config.closing_day {
        add_months(closing_year, closing_month, 1)
    } else {
        (closing_year, closing_month)
    };
    let due_date = clamp_day(due_year, due_month, config.due_day)?;

    tracing::debug!(%purchase_date, %closing_date, %due_date, "resolved statement cycle");

    Ok(StatementCycle {
        closing_date,
        due_date,
    })
}

/// Derives the closing date of the statement due on `due_date`
///
/// Inverse of the due-month rule in [`resolve`]; used to annotate
/// statements reconstructed from their charges alone.
pub fn closing_date_for_due(
    config: &CardConfig,
    due_date: NaiveDate,
) -> Result<NaiveDate, CardError> {
    config.ensure_days_in_range()?;

    let (year, month) = if config.due_day <= config.closing_day {
        add_months(due_date.year(), due_date.month(), -1)
    } else {
        (due_date.year(), due_date.month())
    };
    Ok(clamp_day(year, month, config.closing_day)?)
}
