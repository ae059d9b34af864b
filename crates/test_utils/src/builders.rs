//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{CardId, ChargeId, InstallmentGroupId, Money, PaymentAccountId};
use domain_card::{CardConfig, Charge};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for card configurations
pub struct CardConfigBuilder {
    card_id: CardId,
    closing_day: u32,
    due_day: u32,
    credit_limit: Money,
}

impl Default for CardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CardConfigBuilder {
    /// Creates a builder with the standard close-25/due-5 card
    pub fn new() -> Self {
        Self {
            card_id: CardId::new(),
            closing_day: 25,
            due_day: 5,
            credit_limit: MoneyFixtures::brl_limit(),
        }
    }

    /// Sets the card id
    pub fn with_card_id(mut self, card_id: CardId) -> Self {
        self.card_id = card_id;
        self
    }

    /// Sets the closing day
    pub fn with_closing_day(mut self, closing_day: u32) -> Self {
        self.closing_day = closing_day;
        self
    }

    /// Sets the due day
    pub fn with_due_day(mut self, due_day: u32) -> Self {
        self.due_day = due_day;
        self
    }

    /// Sets the credit limit
    pub fn with_credit_limit(mut self, credit_limit: Money) -> Self {
        self.credit_limit = credit_limit;
        self
    }

    /// Builds the configuration
    pub fn build(self) -> CardConfig {
        CardConfig::new(
            self.card_id,
            self.closing_day,
            self.due_day,
            self.credit_limit,
        )
    }
}

/// Builder for charges
pub struct ChargeBuilder {
    card_id: CardId,
    purchase_date: NaiveDate,
    amount: Money,
    statement_due_date: NaiveDate,
    installment_group_id: Option<InstallmentGroupId>,
    installment_index: u32,
    installment_count: u32,
    settled: bool,
    settlement_date: Option<NaiveDate>,
    payment_account_id: Option<PaymentAccountId>,
}

impl Default for ChargeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeBuilder {
    /// Creates a builder for an unsettled, non-installment BRL charge on
    /// the standard June cycle
    pub fn new() -> Self {
        Self {
            card_id: CardId::new(),
            purchase_date: DateFixtures::purchase_before_closing(),
            amount: MoneyFixtures::brl_100(),
            statement_due_date: DateFixtures::june_cycle_due(),
            installment_group_id: None,
            installment_index: 1,
            installment_count: 1,
            settled: false,
            settlement_date: None,
            payment_account_id: None,
        }
    }

    /// Sets the card id
    pub fn with_card_id(mut self, card_id: CardId) -> Self {
        self.card_id = card_id;
        self
    }

    /// Sets the purchase date
    pub fn with_purchase_date(mut self, purchase_date: NaiveDate) -> Self {
        self.purchase_date = purchase_date;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the statement due date
    pub fn with_statement_due_date(mut self, due_date: NaiveDate) -> Self {
        self.statement_due_date = due_date;
        self
    }

    /// Makes the charge installment `index` of `count` in `group_id`
    pub fn as_installment(
        mut self,
        group_id: InstallmentGroupId,
        index: u32,
        count: u32,
    ) -> Self {
        self.installment_group_id = Some(group_id);
        self.installment_index = index;
        self.installment_count = count;
        self
    }

    /// Marks the charge settled against `account_id`
    pub fn settled_by(mut self, account_id: PaymentAccountId, settlement_date: NaiveDate) -> Self {
        self.settled = true;
        self.settlement_date = Some(settlement_date);
        self.payment_account_id = Some(account_id);
        self
    }

    /// Builds the charge
    pub fn build(self) -> Charge {
        Charge {
            id: ChargeId::new_v7(),
            card_id: self.card_id,
            purchase_date: self.purchase_date,
            amount: self.amount,
            statement_due_date: self.statement_due_date,
            installment_group_id: self.installment_group_id,
            installment_index: self.installment_index,
            installment_count: self.installment_count,
            settled: self.settled,
            settlement_date: self.settlement_date,
            payment_account_id: self.payment_account_id,
        }
    }
}
