//! Dealdesk - embeddable contract approval workflow core
//!
//! Dealdesk tracks sales contracts through a forward-only approval
//! workflow (draft → submitted → processing → completed) with
//! role-gated transitions, and assigns each contract a unique
//! per-year number of the form `{year}DJ{seq}` atomically under
//! concurrent creation.
//!
//! # Quick Start
//!
//! ```ignore
//! use dealdesk::{AccessTier, Actor, ActorId, ContractDraft, Dealdesk};
//!
//! let desk = Dealdesk::in_memory();
//!
//! let writer = ActorId::from_raw(1);
//! let draft = ContractDraft {
//!     customer_company: "Acme Co".into(),
//!     ..Default::default()
//! };
//!
//! let contract = desk.create_contract(writer, &draft)?;   // e.g. 2026DJ1
//! desk.submit(contract.id, Actor::new(writer, AccessTier::Employee))?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Dealdesk`] facade, which wires a
//! sequence allocator and a lifecycle manager over a shared store.
//! The presentation layer (forms, auth, pagination, export) lives
//! elsewhere and reaches this core only via in-process calls.

// Re-export the public API from dealdesk-api
pub use dealdesk_api::*;
