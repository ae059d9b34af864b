//! Consolidated multi-card summary
//!
//! Dashboard roll-up over every card for one reporting instant. The
//! reference date is an explicit parameter; nothing here reads a clock.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CardId, Money};

use crate::card::CardConfig;
use crate::charge::Charge;

/// Totals across all cards as of a reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedSummary {
    pub limit_total: Money,
    pub unsettled_total: Money,
    /// Headroom left across all cards, floored at zero
    pub available_limit: Money,
    /// Earliest due date of any card's next unsettled statement
    pub nearest_due_date: Option<NaiveDate>,
    /// Whole days from the reference date to `nearest_due_date`; zero when
    /// there is none
    pub days_to_due: i64,
}

/// Rolls up all cards' charges as of `reference_date`
///
/// The nearest due date is selected among statements that already exist
/// for each card (the next unsettled one on or after the reference date),
/// not the cycle a purchase made today would land in. Charges whose card
/// is not in `cards` are ignored.
pub fn summarize(
    cards: &[CardConfig],
    charges: &[Charge],
    reference_date: NaiveDate,
) -> ConsolidatedSummary {
    let currency = cards
        .first()
        .map(|c| c.credit_limit.currency())
        .unwrap_or_default();

    let card_ids: HashSet<CardId> = cards.iter().map(|c| c.card_id).collect();

    let limit_total = cards
        .iter()
        .fold(Money::zero(currency), |acc, card| acc + card.credit_limit);

    let unsettled_total = charges
        .iter()
        .filter(|c| !c.settled && card_ids.contains(&c.card_id))
        .fold(Money::zero(currency), |acc, c| acc + c.amount);

    let nearest_due_date = cards
        .iter()
        .filter_map(|card| next_unsettled_due_date(card.card_id, charges, reference_date))
        .min();

    let days_to_due = nearest_due_date
        .map(|due| (due - reference_date).num_days())
        .unwrap_or(0);

    let headroom = limit_total - unsettled_total;
    let available_limit = if headroom.is_negative() {
        Money::zero(currency)
    } else {
        headroom
    };

    ConsolidatedSummary {
        limit_total,
        unsettled_total,
        available_limit,
        nearest_due_date,
        days_to_due,
    }
}

/// Due date of the card's next statement still carrying unsettled charges
/// on or after `reference_date`
fn next_unsettled_due_date(
    card_id: CardId,
    charges: &[Charge],
    reference_date: NaiveDate,
) -> Option<NaiveDate> {
    charges
        .iter()
        .filter(|c| {
            c.card_id == card_id && !c.settled && c.statement_due_date >= reference_date
        })
        .map(|c| c.statement_due_date)
        .min()
}
