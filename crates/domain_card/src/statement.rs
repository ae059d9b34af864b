//! Statement read models
//!
//! A statement is never stored: it is recomputed on demand from the
//! charges that share its due date. Aggregation is a pure fold, so
//! repeated calls over the same snapshot yield identical values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CardId, Money, PaymentAccountId};

use crate::card::CardConfig;
use crate::charge::Charge;
use crate::cycle;

/// Aggregate view of one card's statement, identified by `(card_id, due_date)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub card_id: CardId,
    pub due_date: NaiveDate,
    /// Closing date derived from the card configuration; absent when the
    /// configured days are out of range
    pub closing_date: Option<NaiveDate>,
    pub total_amount: Money,
    pub total_count: u32,
    pub settled_count: u32,
    pub fully_settled: bool,
    /// Account used to settle the statement: the first settled charge's
    /// account in input order. Divergent accounts are not reconciled.
    pub payment_account_id: Option<PaymentAccountId>,
}

/// Aggregates the charges billed on `due_date` into a statement
///
/// Charges with other due dates are ignored; an empty selection yields the
/// zero-valued statement.
pub fn aggregate(config: &CardConfig, charges: &[Charge], due_date: NaiveDate) -> Statement {
    let currency = config.credit_limit.currency();
    let mut total_amount = Money::zero(currency);
    let mut total_count = 0u32;
    let mut settled_count = 0u32;
    let mut payment_account_id = None;

    for charge in charges.iter().filter(|c| c.statement_due_date == due_date) {
        total_amount = total_amount + charge.amount;
        total_count += 1;
        if charge.settled {
            settled_count += 1;
            if payment_account_id.is_none() {
                payment_account_id = charge.payment_account_id;
            }
        }
    }

    Statement {
        card_id: config.card_id,
        due_date,
        closing_date: cycle::closing_date_for_due(config, due_date).ok(),
        total_amount,
        total_count,
        settled_count,
        fully_settled: total_count > 0 && settled_count == total_count,
        payment_account_id,
    }
}

/// The distinct statement due dates present in `charges`, ascending
///
/// This is the statement index for a card: one entry per statement that
/// has at least one charge.
pub fn statement_due_dates(charges: &[Charge]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = charges.iter().map(|c| c.statement_due_date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Returns the statement's charges with every unsettled one marked settled
///
/// This is the write-set the persistence layer stores back. Charges that
/// were already settled keep their original settlement fields.
pub fn settle_statement(
    charges: &[Charge],
    due_date: NaiveDate,
    account_id: PaymentAccountId,
    settlement_date: NaiveDate,
) -> Vec<Charge> {
    charges
        .iter()
        .filter(|c| c.statement_due_date == due_date)
        .cloned()
        .map(|mut charge| {
            charge.settle(account_id, settlement_date);
            charge
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::calendar::date;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn config() -> CardConfig {
        CardConfig::new(
            CardId::new(),
            25,
            5,
            Money::new(dec!(8000), Currency::BRL),
        )
    }

    fn charge(config: &CardConfig, amount: rust_decimal::Decimal, due: NaiveDate) -> Charge {
        Charge::single(
            config.card_id,
            date(2025, 6, 20).unwrap(),
            Money::new(amount, Currency::BRL),
            due,
        )
    }

    #[test]
    fn test_aggregate_sums_only_matching_due_date() {
        let config = config();
        let due = date(2025, 7, 5).unwrap();
        let other = date(2025, 8, 5).unwrap();
        let charges = vec![
            charge(&config, dec!(100.00), due),
            charge(&config, dec!(50.50), due),
            charge(&config, dec!(999.99), other),
        ];

        let statement = aggregate(&config, &charges, due);
        assert_eq!(statement.total_amount.amount(), dec!(150.50));
        assert_eq!(statement.total_count, 2);
        assert_eq!(statement.settled_count, 0);
        assert!(!statement.fully_settled);
    }

    #[test]
    fn test_aggregate_derives_closing_date() {
        let config = config();
        let statement = aggregate(&config, &[], date(2025, 7, 5).unwrap());
        assert_eq!(statement.closing_date, Some(date(2025, 6, 25).unwrap()));
    }

    #[test]
    fn test_aggregate_empty_input_is_zero_valued() {
        let config = config();
        let statement = aggregate(&config, &[], date(2025, 7, 5).unwrap());

        assert!(statement.total_amount.is_zero());
        assert_eq!(statement.total_count, 0);
        assert_eq!(statement.settled_count, 0);
        assert!(!statement.fully_settled);
        assert!(statement.payment_account_id.is_none());
    }

    #[test]
    fn test_aggregate_surfaces_first_settled_account() {
        let config = config();
        let due = date(2025, 7, 5).unwrap();
        let first_account = PaymentAccountId::new();
        let second_account = PaymentAccountId::new();

        let mut a = charge(&config, dec!(10), due);
        a.settle(first_account, date(2025, 7, 1).unwrap());
        let mut b = charge(&config, dec!(20), due);
        b.settle(second_account, date(2025, 7, 2).unwrap());

        let statement = aggregate(&config, &[a, b], due);
        assert_eq!(statement.payment_account_id, Some(first_account));
        assert!(statement.fully_settled);
        assert_eq!(statement.settled_count, 2);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let config = config();
        let due = date(2025, 7, 5).unwrap();
        let charges = vec![
            charge(&config, dec!(10), due),
            charge(&config, dec!(20), due),
        ];

        let first = aggregate(&config, &charges, due);
        let second = aggregate(&config, &charges, due);
        assert_eq!(first, second);
    }

    #[test]
    fn test_statement_due_dates_are_sorted_and_distinct() {
        let config = config();
        let july = date(2025, 7, 5).unwrap();
        let august = date(2025, 8, 5).unwrap();
        let charges = vec![
            charge(&config, dec!(10), august),
            charge(&config, dec!(20), july),
            charge(&config, dec!(30), july),
        ];

        assert_eq!(statement_due_dates(&charges), vec![july, august]);
    }

    #[test]
    fn test_settle_statement_touches_only_matching_charges() {
        let config = config();
        let due = date(2025, 7, 5).unwrap();
        let account = PaymentAccountId::new();

        let charges = vec![
            charge(&config, dec!(10), due),
            charge(&config, dec!(20), date(2025, 8, 5).unwrap()),
        ];

        let settled = settle_statement(&charges, due, account, date(2025, 7, 4).unwrap());
        assert_eq!(settled.len(), 1);
        assert!(settled[0].settled);
        assert_eq!(settled[0].payment_account_id, Some(account));
    }
}
