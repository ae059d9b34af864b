//! Core Kernel - Foundational types and utilities for the card statement engine
//!
//! This crate provides the fundamental building blocks used by the domain
//! modules:
//! - Money types with precise decimal arithmetic
//! - Month-length-safe calendar arithmetic
//! - Common strongly-typed identifiers

pub mod calendar;
pub mod identifiers;
pub mod money;

pub use calendar::CalendarError;
pub use identifiers::{CardId, ChargeId, InstallmentGroupId, PaymentAccountId};
pub use money::{Currency, Money, MoneyError};
