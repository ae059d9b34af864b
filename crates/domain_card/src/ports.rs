//! Persistence port for card and charge snapshots
//!
//! The engine performs no I/O of its own; callers implement this port
//! against their store and feed the snapshots into the pure functions.
//! Writes are limited to settlement fields and whole installment plans.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::CardId;

use crate::card::CardConfig;
use crate::charge::{Charge, InstallmentPlan};

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Snapshot reads and settlement writes for one user's cards
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Loads every card configuration
    async fn load_cards(&self) -> Result<Vec<CardConfig>, PortError>;

    /// Loads all charges for one card
    async fn load_charges(&self, card_id: CardId) -> Result<Vec<Charge>, PortError>;

    /// Persists updated settlement fields for the given charges
    async fn save_settlements(&self, charges: &[Charge]) -> Result<(), PortError>;

    /// Inserts a whole installment plan; all charges land or none do
    async fn insert_installment_plan(&self, plan: &InstallmentPlan) -> Result<(), PortError>;
}
