//! Lifecycle integration tests
//!
//! Exercises the approval state machine through the public facade:
//! the canonical approval chain, the authorization matrix, deletion
//! rules, and the no-regression property.

mod approval_chain;
