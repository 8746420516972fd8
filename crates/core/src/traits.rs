//! Storage seam for the contract workflow
//!
//! `ContractStore` is the trait the engine drives. It keeps the
//! lifecycle and allocation logic independent of the backing store:
//! the in-memory table implementation can be swapped for a SQL-backed
//! one without touching the upper layers, as long as the atomicity
//! notes below hold.
//!
//! Thread safety: all methods must be safe to call concurrently from
//! multiple threads (requires Send + Sync).

use crate::contract::{Contract, ContractDraft, ContractItem, ContractPatch, ItemInput};
use crate::error::Result;
use crate::types::{ActorId, ContractId, ContractStatus, Operation, Seq, Year};

/// Storage abstraction for contracts and their line items
///
/// The store owns three pieces of mutable state the engine never
/// touches directly: the dense contract id counter, the `(year, seq)`
/// sequence space, and the persisted rows themselves.
pub trait ContractStore: Send + Sync {
    /// Atomic allocation-plus-insert unit
    ///
    /// Reads the current maximum sequence for `year`, takes the next
    /// one, composes the contract number, and inserts the new row and
    /// its item batch, all inside one critical section. Concurrent
    /// allocations serialize on that section regardless of year.
    ///
    /// The row is persisted in `Draft` with a store-assigned id.
    ///
    /// # Errors
    ///
    /// `Error::Conflict` if the `(year, seq)` or contract number
    /// uniqueness check fails despite the lock (the caller must retry
    /// the whole unit with a fresh sequence, never reuse this one).
    fn allocate_insert(
        &self,
        year: Year,
        writer: ActorId,
        draft: &ContractDraft,
    ) -> Result<Contract>;

    /// Highest sequence allocated for `year` so far
    ///
    /// None if the year has no contracts yet. Gaps below this value
    /// are possible; values above it are not.
    fn max_seq(&self, year: Year) -> Result<Option<Seq>>;

    /// Fetch a contract by id
    fn get(&self, id: ContractId) -> Result<Option<Contract>>;

    /// Line items of a contract, in insertion order
    ///
    /// Empty both for an item-less contract and for a missing one;
    /// callers that care check `get` first.
    fn items(&self, id: ContractId) -> Result<Vec<ContractItem>>;

    /// All contracts, newest first
    fn list(&self) -> Result<Vec<Contract>>;

    /// Compare-and-set status update
    ///
    /// Re-checks that the persisted status still equals `expected`
    /// under the write lock, then writes `next` and bumps
    /// `updated_at`. Only the status field changes; concurrent
    /// content edits are not clobbered.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id does not exist;
    /// `Error::InvalidState` (tagged with `op`) if the persisted
    /// status no longer equals `expected`. Persisted state is
    /// untouched in both cases.
    fn update_status(
        &self,
        id: ContractId,
        op: Operation,
        expected: ContractStatus,
        next: ContractStatus,
    ) -> Result<Contract>;

    /// Apply a content patch, optionally replacing the item batch
    ///
    /// The replacement list, when given, swaps out every existing
    /// line. Status, writer, id and contract number are never
    /// touched.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id does not exist.
    fn update_content(
        &self,
        id: ContractId,
        patch: &ContractPatch,
        items: Option<Vec<ItemInput>>,
    ) -> Result<Contract>;

    /// Remove a contract and cascade to its line items
    ///
    /// Returns the removed row. The `(year, seq)` pair stays burned:
    /// deletion never frees a sequence for reuse.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id does not exist.
    fn delete(&self, id: ContractId) -> Result<Contract>;
}
