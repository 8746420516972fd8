//! Sequence allocation integration tests
//!
//! Uniqueness and density of the per-year contract numbering, under
//! both serial and contended concurrent creation.

mod allocation;
mod contention;
mod properties;
