//! Public API for Dealdesk
//!
//! Exposes the `Dealdesk` facade and its configuration, plus
//! re-exports of the domain types a caller needs to drive it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod facade;

pub use config::DealdeskConfig;
pub use facade::Dealdesk;

// Re-export the domain vocabulary so callers rarely need the inner
// crates directly.
pub use dealdesk_core::{
    AccessTier, Actor, ActorId, Contract, ContractDraft, ContractId, ContractItem, ContractNo,
    ContractPatch, ContractStatus, Error, ItemInput, Limits, Operation, Result, Seq, VatMode, Year,
};
pub use dealdesk_engine::RetryConfig;
pub use dealdesk_storage::MemStore;
