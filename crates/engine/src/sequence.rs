//! Sequence allocator: contract creation with per-year numbering
//!
//! Creation is the one place contracts receive their number. The
//! store runs read-max / increment / insert as one serialized unit;
//! this allocator validates the draft, invokes that unit, and retries
//! the whole unit (with a fresh sequence each attempt) when it loses
//! a race. A previously computed sequence is never reused.
//!
//! Numbers are assigned in commit order of the allocation unit, not
//! request-arrival order: a creation that arrives first but loses the
//! lock race may end up with the higher sequence. Uniqueness and
//! forward motion are the guarantees, not FIFO fairness.

use std::sync::Arc;

use dealdesk_core::{ActorId, Contract, ContractDraft, ContractStore, Limits, Result, Year};
use tracing::{info, warn};

use crate::retry::RetryConfig;

/// Allocates contract numbers and persists new contracts
///
/// Cheap to clone; shares the store.
#[derive(Debug)]
pub struct SequenceAllocator<S> {
    store: Arc<S>,
    retry: RetryConfig,
    limits: Limits,
}

impl<S> Clone for SequenceAllocator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            retry: self.retry.clone(),
            limits: self.limits.clone(),
        }
    }
}

impl<S: ContractStore> SequenceAllocator<S> {
    /// Create an allocator over `store` with default retry and limits
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            retry: RetryConfig::default(),
            limits: Limits::default(),
        }
    }

    /// Replace the retry configuration
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the content limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Create a contract dated in the current year
    ///
    /// Validates the draft, allocates the next `{year}DJ{seq}` number
    /// and persists the row in `Draft` with its item batch.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for a missing customer company or oversized
    /// fields; `Error::Conflict` if every retry lost the allocation
    /// race.
    pub fn create(&self, writer: ActorId, draft: &ContractDraft) -> Result<Contract> {
        self.create_in_year(Year::current(), writer, draft)
    }

    /// Create a contract in an explicit year
    ///
    /// Same as [`create`](Self::create) with the creation year pinned.
    pub fn create_in_year(
        &self,
        year: Year,
        writer: ActorId,
        draft: &ContractDraft,
    ) -> Result<Contract> {
        self.limits.validate_draft(draft)?;

        let mut attempt = 0u32;
        loop {
            match self.store.allocate_insert(year, writer, draft) {
                Ok(contract) => {
                    info!(
                        contract_id = contract.id.as_u64(),
                        contract_no = %contract.contract_no,
                        writer = %writer,
                        "contract created"
                    );
                    return Ok(contract);
                }
                Err(err) if err.is_retryable() && attempt < self.retry.max_retries => {
                    warn!(
                        year = year.as_i32(),
                        attempt,
                        error = %err,
                        "allocation conflict, retrying the unit"
                    );
                    std::thread::sleep(self.retry.delay(attempt));
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
