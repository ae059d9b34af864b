//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use chrono::NaiveDate;
use core_kernel::calendar::clamp_day;
use core_kernel::{CardId, Currency, Money};
use domain_card::CardConfig;
use proptest::prelude::*;

/// Strategy for generating nominal days of month (1-31)
pub fn day_of_month_strategy() -> impl Strategy<Value = u32> {
    1u32..=31u32
}

/// Strategy for generating arbitrary calendar dates between 2000 and 2089
pub fn calendar_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2090i32, 1u32..=12u32, 1u32..=31u32)
        .prop_map(|(year, month, day)| clamp_day(year, month, day).unwrap())
}

/// Strategy for generating positive BRL amounts in centavos
pub fn brl_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::BRL))
}

/// Strategy for generating installment counts (1 to 48)
pub fn installment_count_strategy() -> impl Strategy<Value = u32> {
    1u32..=48u32
}

/// Strategy for generating card configurations with in-range days
///
/// The generated configs satisfy the day-range rule but not necessarily
/// the closing/due gap rule; compose with `prop_filter` when the gap
/// matters.
pub fn card_config_strategy() -> impl Strategy<Value = CardConfig> {
    (day_of_month_strategy(), day_of_month_strategy(), brl_money_strategy())
        .prop_map(|(closing_day, due_day, credit_limit)| {
            CardConfig::new(CardId::new(), closing_day, due_day, credit_limit)
        })
}
