//! Workflow engine for Dealdesk
//!
//! Two components over the storage seam:
//! - `SequenceAllocator`: contract creation with atomic per-year
//!   numbering and conflict retry
//! - `LifecycleManager`: the role-gated, forward-only approval state
//!   machine
//!
//! The authorization matrix lives in `authz` as a standalone decision
//! table so it can be tested without a store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authz;
pub mod lifecycle;
pub mod retry;
pub mod sequence;

pub use authz::{allowed, required_state, Relation};
pub use lifecycle::LifecycleManager;
pub use retry::RetryConfig;
pub use sequence::SequenceAllocator;
