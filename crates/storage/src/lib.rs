//! Storage backends for Dealdesk
//!
//! Currently one backend: `MemStore`, an in-memory implementation of
//! the `ContractStore` seam with the same atomicity guarantees a
//! row-locking SQL store would give (serialized allocation unit,
//! compare-and-set status updates, cascade delete).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mem;

pub use mem::MemStore;
