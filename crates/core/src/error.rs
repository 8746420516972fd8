//! Error types for the contract workflow core
//!
//! This module defines all error types surfaced to callers.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only `Conflict` is ever retried, and only by the sequence allocator
//! (the whole allocate-plus-insert unit is re-run). Everything else is
//! terminal for the invocation and reported as-is.

use crate::types::{ContractId, ContractNo, ContractStatus, Operation};
use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contract workflow core
#[derive(Debug, Error)]
pub enum Error {
    /// Contract id does not exist
    #[error("contract {0} not found")]
    NotFound(ContractId),

    /// Operation not legal from the contract's current state
    ///
    /// The persisted status is left untouched.
    #[error("cannot {op} contract {id}: status is {current}, requires {required}")]
    InvalidState {
        /// Contract the operation targeted
        id: ContractId,
        /// The rejected operation
        op: Operation,
        /// Status found in the store
        current: ContractStatus,
        /// Status the operation requires
        required: ContractStatus,
    },

    /// Actor's tier/ownership does not satisfy the authorization rule
    #[error("actor {actor_id} may not {op} contract {id}")]
    Forbidden {
        /// Contract the operation targeted
        id: ContractId,
        /// The rejected operation
        op: Operation,
        /// The rejected actor
        actor_id: u64,
    },

    /// Sequence allocation race lost; retry the whole allocation unit
    #[error("contract number {0} already taken")]
    Conflict(ContractNo),

    /// Missing or malformed required fields
    #[error("validation failed: {0}")]
    Validation(String),

    /// Storage layer failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Whether re-running the failed unit may succeed
    ///
    /// True only for allocation conflicts; all other errors are
    /// deterministic for the same inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}
