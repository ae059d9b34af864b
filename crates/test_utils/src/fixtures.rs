//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the statement engine test suites.
//! These fixtures are designed to be consistent and predictable for unit
//! tests.

use chrono::NaiveDate;
use core_kernel::{CardId, Currency, Money};
use domain_card::CardConfig;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

/// Initialises tracing output for a test binary, once
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Respects `RUST_LOG`.
pub fn init_test_logging() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
    Lazy::force(&INIT);
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard BRL amount for testing
    pub fn brl_100() -> Money {
        Money::new(dec!(100.00), Currency::BRL)
    }

    /// Creates a typical deferred-purchase total
    pub fn brl_purchase_total() -> Money {
        Money::new(dec!(1200.00), Currency::BRL)
    }

    /// Creates a standard credit limit
    pub fn brl_limit() -> Money {
        Money::new(dec!(8000.00), Currency::BRL)
    }
}

/// Fixture for calendar test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard purchase date (Jun 20, 2025) - before the standard closing day
    pub fn purchase_before_closing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    /// Purchase date after the standard closing day (Jun 28, 2025)
    pub fn purchase_after_closing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 28).unwrap()
    }

    /// Due date of the standard card's June cycle (Jul 5, 2025)
    pub fn june_cycle_due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()
    }

    /// Due date one statement later (Aug 5, 2025)
    pub fn july_cycle_due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()
    }

    /// Reference "today" used by summary tests (Jul 2, 2025)
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()
    }

    /// A month-end purchase date that needs clamping downstream (May 31, 2025)
    pub fn month_end_purchase() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()
    }
}

/// Fixture for card configurations
pub struct CardFixtures;

impl CardFixtures {
    /// Standard card: closes on the 25th, due on the 5th of the next month
    pub fn standard() -> CardConfig {
        CardConfig::new(
            CardId::new(),
            25,
            5,
            MoneyFixtures::brl_limit(),
        )
    }

    /// Card whose due day falls in the same month as its closing day
    pub fn same_month_due() -> CardConfig {
        CardConfig::new(
            CardId::new(),
            10,
            20,
            MoneyFixtures::brl_limit(),
        )
    }

    /// Card closing on the 31st: every short month clamps its closing date
    pub fn month_end_closing() -> CardConfig {
        CardConfig::new(
            CardId::new(),
            31,
            10,
            MoneyFixtures::brl_limit(),
        )
    }
}
