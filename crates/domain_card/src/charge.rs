//! Charges and installment plans
//!
//! A charge is one billed purchase, or one slice of a deferred purchase.
//! Deferred purchases are generated whole: every installment charge exists
//! from the moment the plan is created, each assigned to a consecutive
//! statement.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::calendar::{add_months, clamp_day};
use core_kernel::{CardId, ChargeId, Currency, InstallmentGroupId, Money, PaymentAccountId};

use crate::card::CardConfig;
use crate::cycle;
use crate::error::CardError;

/// A single billed purchase, or one installment of a deferred purchase
///
/// A non-installment charge has `installment_count = 1`,
/// `installment_index = 1`, and no group id. The optional group id is the
/// discriminator for membership in a deferred purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: ChargeId,
    pub card_id: CardId,
    /// Calendar date of the original purchase
    pub purchase_date: NaiveDate,
    pub amount: Money,
    /// Due date of the statement that bills this charge
    pub statement_due_date: NaiveDate,
    /// Present iff this charge is part of a deferred purchase
    pub installment_group_id: Option<InstallmentGroupId>,
    /// 1-based position within the group
    pub installment_index: u32,
    pub installment_count: u32,
    pub settled: bool,
    pub settlement_date: Option<NaiveDate>,
    pub payment_account_id: Option<PaymentAccountId>,
}

impl Charge {
    /// Creates a plain (non-installment) charge billed on `statement_due_date`
    pub fn single(
        card_id: CardId,
        purchase_date: NaiveDate,
        amount: Money,
        statement_due_date: NaiveDate,
    ) -> Self {
        Self {
            id: ChargeId::new_v7(),
            card_id,
            purchase_date,
            amount,
            statement_due_date,
            installment_group_id: None,
            installment_index: 1,
            installment_count: 1,
            settled: false,
            settlement_date: None,
            payment_account_id: None,
        }
    }

    /// Returns true if this charge belongs to a deferred purchase
    pub fn is_installment(&self) -> bool {
        self.installment_group_id.is_some()
    }

    /// Marks the charge settled against `account_id` on `settlement_date`
    ///
    /// A charge that is already settled keeps its original settlement.
    pub fn settle(&mut self, account_id: PaymentAccountId, settlement_date: NaiveDate) {
        if self.settled {
            return;
        }
        self.settled = true;
        self.settlement_date = Some(settlement_date);
        self.payment_account_id = Some(account_id);
    }
}

/// A deferred purchase split into monthly installments
///
/// The plan always holds exactly `installment_count` charges with indices
/// `1..=installment_count`, one per consecutive statement. The persistence
/// layer inserts them atomically: all rows exist or none do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub group_id: InstallmentGroupId,
    pub charges: Vec<Charge>,
}

impl InstallmentPlan {
    /// Generates the full set of installment charges for a deferred purchase
    ///
    /// The first installment lands on the statement that would bill the
    /// purchase itself; each subsequent one lands on the following month's
    /// statement. Amounts come from [`Money::allocate`], so their sum is
    /// exactly `total` and odd minor units sit on the earliest
    /// installments.
    pub fn generate(
        config: &CardConfig,
        purchase_date: NaiveDate,
        total: Money,
        installment_count: u32,
    ) -> Result<Self, CardError> {
        if installment_count == 0 {
            return Err(CardError::invalid_plan("installment count must be at least 1"));
        }
        if total.is_negative() {
            return Err(CardError::invalid_plan(format!(
                "total amount must not be negative, got {total}"
            )));
        }

        let first = cycle::resolve(config, purchase_date)?;
        let amounts = total.allocate(installment_count)?;
        let group_id = InstallmentGroupId::new_v7();

        let mut charges = Vec::with_capacity(installment_count as usize);
        let mut due_date = first.due_date;
        for (index, amount) in amounts.into_iter().enumerate() {
            charges.push(Charge {
                id: ChargeId::new_v7(),
                card_id: config.card_id,
                purchase_date,
                amount,
                statement_due_date: due_date,
                installment_group_id: Some(group_id),
                installment_index: index as u32 + 1,
                installment_count,
                settled: false,
                settlement_date: None,
                payment_account_id: None,
            });

            // The nominal due day recovers after a short month.
            let (year, month) = add_months(due_date.year(), due_date.month(), 1);
            due_date = clamp_day(year, month, config.due_day)?;
        }

        Ok(Self { group_id, charges })
    }

    /// Sum of all installment amounts
    pub fn total(&self) -> Money {
        let mut iter = self.charges.iter();
        match iter.next() {
            Some(first) => iter.fold(first.amount, |acc, c| acc + c.amount),
            None => Money::zero(Currency::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::calendar::date;
    use rust_decimal_macros::dec;

    fn config(closing_day: u32, due_day: u32) -> CardConfig {
        CardConfig::new(
            CardId::new(),
            closing_day,
            due_day,
            Money::new(dec!(8000), Currency::BRL),
        )
    }

    #[test]
    fn test_single_charge_has_canonical_non_installment_shape() {
        let charge = Charge::single(
            CardId::new(),
            date(2025, 6, 20).unwrap(),
            Money::new(dec!(59.90), Currency::BRL),
            date(2025, 7, 5).unwrap(),
        );

        assert!(!charge.is_installment());
        assert_eq!(charge.installment_index, 1);
        assert_eq!(charge.installment_count, 1);
        assert!(charge.installment_group_id.is_none());
        assert!(!charge.settled);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut charge = Charge::single(
            CardId::new(),
            date(2025, 6, 20).unwrap(),
            Money::new(dec!(100), Currency::BRL),
            date(2025, 7, 5).unwrap(),
        );

        let first_account = PaymentAccountId::new();
        charge.settle(first_account, date(2025, 7, 3).unwrap());
        charge.settle(PaymentAccountId::new(), date(2025, 7, 4).unwrap());

        assert_eq!(charge.payment_account_id, Some(first_account));
        assert_eq!(charge.settlement_date, Some(date(2025, 7, 3).unwrap()));
    }

    #[test]
    fn test_generate_assigns_consecutive_due_dates() {
        let plan = InstallmentPlan::generate(
            &config(25, 5),
            date(2025, 5, 31).unwrap(),
            Money::new(dec!(1200), Currency::BRL),
            4,
        )
        .unwrap();

        // May 31 misses the May 25 closing, so the first statement is due July 5.
        let due_dates: Vec<NaiveDate> =
            plan.charges.iter().map(|c| c.statement_due_date).collect();
        assert_eq!(
            due_dates,
            vec![
                date(2025, 7, 5).unwrap(),
                date(2025, 8, 5).unwrap(),
                date(2025, 9, 5).unwrap(),
                date(2025, 10, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn test_generate_indices_are_one_based_and_complete() {
        let plan = InstallmentPlan::generate(
            &config(25, 5),
            date(2025, 6, 10).unwrap(),
            Money::new(dec!(100), Currency::BRL),
            12,
        )
        .unwrap();

        let indices: Vec<u32> = plan.charges.iter().map(|c| c.installment_index).collect();
        assert_eq!(indices, (1..=12).collect::<Vec<u32>>());
        assert!(plan
            .charges
            .iter()
            .all(|c| c.installment_group_id == Some(plan.group_id)));
        assert!(plan.charges.iter().all(|c| c.installment_count == 12));
    }

    #[test]
    fn test_generate_amounts_sum_to_total() {
        let total = Money::new(dec!(1000), Currency::BRL);
        let plan = InstallmentPlan::generate(
            &config(25, 5),
            date(2025, 6, 10).unwrap(),
            total,
            3,
        )
        .unwrap();

        assert_eq!(plan.total(), total);
        assert_eq!(plan.charges[0].amount.amount(), dec!(333.34));
        assert_eq!(plan.charges[1].amount.amount(), dec!(333.33));
    }

    #[test]
    fn test_generate_due_day_recovers_after_february() {
        // Due on the 31st: February clamps to its last day, March recovers.
        let plan = InstallmentPlan::generate(
            &config(15, 31),
            date(2025, 1, 10).unwrap(),
            Money::new(dec!(300), Currency::BRL),
            3,
        )
        .unwrap();

        let due_dates: Vec<NaiveDate> =
            plan.charges.iter().map(|c| c.statement_due_date).collect();
        assert_eq!(
            due_dates,
            vec![
                date(2025, 1, 31).unwrap(),
                date(2025, 2, 28).unwrap(),
                date(2025, 3, 31).unwrap(),
            ]
        );
    }

    #[test]
    fn test_generate_rejects_zero_installments() {
        let result = InstallmentPlan::generate(
            &config(25, 5),
            date(2025, 6, 10).unwrap(),
            Money::new(dec!(100), Currency::BRL),
            0,
        );
        assert!(matches!(result, Err(CardError::InvalidPlan(_))));
    }

    #[test]
    fn test_generate_rejects_negative_total() {
        let result = InstallmentPlan::generate(
            &config(25, 5),
            date(2025, 6, 10).unwrap(),
            Money::new(dec!(-100), Currency::BRL),
            3,
        );
        assert!(matches!(result, Err(CardError::InvalidPlan(_))));
    }
}
