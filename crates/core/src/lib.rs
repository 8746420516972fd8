//! Core types and traits for Dealdesk
//!
//! This crate defines the foundational types used throughout the system:
//! - ContractId / ActorId: numeric identifiers
//! - Year / Seq / ContractNo: the per-year contract numbering scheme
//! - ContractStatus / AccessTier / Operation: workflow and authorization enums
//! - Contract / ContractItem and their input shapes
//! - Error: error type hierarchy
//! - ContractStore: the storage seam
//! - Limits: content size caps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod limits;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use contract::{Contract, ContractDraft, ContractItem, ContractPatch, ItemInput, VatMode};
pub use error::{Error, Result};
pub use limits::Limits;
pub use traits::ContractStore;
pub use types::{
    AccessTier, Actor, ActorId, ContractId, ContractNo, ContractStatus, Operation, Seq, Year,
};
