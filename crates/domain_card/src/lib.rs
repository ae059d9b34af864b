//! Card Domain - Statement Cycles and Installment Allocation
//!
//! This crate implements the billing core of the tracker: which monthly
//! statement a charge belongs to, where each installment of a deferred
//! purchase lands, and what the resulting statements and dashboard totals
//! look like.
//!
//! # Cycle Rules
//!
//! - A purchase after the card's closing day rolls to the next cycle;
//!   a purchase on the closing day itself stays in the current one.
//! - A due day on or before the closing day falls due in the month after
//!   the statement closes; equal days mean next month.
//! - Nominal days past the end of a short month land on the month's last
//!   day. Overflow is always an explicit clamp, never a silent rollover.
//!
//! Every function here is pure and synchronous: snapshots in, values out.
//! Fetching those snapshots and writing results back is the storage
//! caller's concern, behind [`ports::CardStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_card::{cycle, statement, CardConfig};
//!
//! let cycle = cycle::resolve(&config, purchase_date)?;
//! let charge = Charge::single(config.card_id, purchase_date, amount, cycle.due_date);
//!
//! let statement = statement::aggregate(&config, &charges, cycle.due_date);
//! ```

pub mod card;
pub mod charge;
pub mod cycle;
pub mod error;
pub mod installment;
pub mod ports;
pub mod statement;
pub mod summary;

pub use card::{CardConfig, MIN_CLOSING_DUE_GAP_DAYS};
pub use charge::{Charge, InstallmentPlan};
pub use cycle::StatementCycle;
pub use error::CardError;
pub use installment::{ExternalSibling, GroupDiagnostic, SiblingResolution};
pub use ports::{CardStore, PortError};
pub use statement::Statement;
pub use summary::ConsolidatedSummary;
