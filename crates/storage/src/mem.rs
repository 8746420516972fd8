//! MemStore: in-memory storage backend for contracts
//!
//! This module implements the `ContractStore` trait using:
//! - `BTreeMap<ContractId, Contract>` for the contract table
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for dense, monotonically increasing contract ids
//! - `DashMap` for the owned line-item table
//! - Secondary indices for the `(year, seq)` and contract-number
//!   uniqueness constraints
//!
//! # Design Notes
//!
//! - **One write lock for table + indices**: the row map, the
//!   sequence indices and the number index are mutated under the same
//!   write lock, so readers never observe a row without its index
//!   entries. This is also the allocation critical section: a
//!   concurrent allocator blocks here until the read-max / increment
//!   / insert unit of the winner has committed.
//! - **Sequence high-water mark**: the maximum sequence ever
//!   allocated per year is tracked separately from the live index and
//!   survives deletion. Sequences only move forward; deleting a
//!   contract burns its number.
//! - **CAS status update**: the precondition is re-checked against
//!   the latest committed row under the write lock, so a transition
//!   that lost a race fails with `InvalidState` instead of silently
//!   regressing the state machine.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;

use dealdesk_core::{
    ActorId, Contract, ContractDraft, ContractId, ContractItem, ContractNo, ContractPatch,
    ContractStatus, ContractStore, Error, ItemInput, Operation, Result, Seq, Year,
};

/// Tables and indices guarded by the single write lock
#[derive(Debug, Default)]
struct Tables {
    /// Contract rows, ordered by id (insertion order)
    rows: BTreeMap<ContractId, Contract>,
    /// Live `(year, seq)` pairs → owning contract
    seq_index: HashMap<(Year, Seq), ContractId>,
    /// Live contract numbers → owning contract
    no_index: HashMap<ContractNo, ContractId>,
    /// Highest sequence ever allocated per year; never decremented
    seq_high_water: HashMap<Year, Seq>,
}

/// In-memory contract store
///
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`.
/// Suitable both as the test double and as the real backing store of
/// an embedded deployment.
#[derive(Debug)]
pub struct MemStore {
    tables: RwLock<Tables>,
    /// Line items per contract; cascade-deleted with the row
    items: DashMap<ContractId, Vec<ContractItem>>,
    /// Next contract id (ids start at 1)
    next_id: AtomicU64,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> ContractId {
        ContractId::from_raw(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl ContractStore for MemStore {
    fn allocate_insert(
        &self,
        year: Year,
        writer: ActorId,
        draft: &ContractDraft,
    ) -> Result<Contract> {
        let mut tables = self.tables.write();

        // Read max for the year, increment. The high-water mark is
        // consulted rather than the live index so deleted contracts
        // never free their sequence.
        let seq = tables
            .seq_high_water
            .get(&year)
            .map(Seq::next)
            .unwrap_or(Seq::FIRST);
        let contract_no = ContractNo::new(year, seq);

        // Uniqueness double-check. Under the write lock this cannot
        // trip for MemStore itself; it keeps the trait contract
        // honest for stores whose lock is narrower than the unit.
        if tables.seq_index.contains_key(&(year, seq)) || tables.no_index.contains_key(&contract_no)
        {
            return Err(Error::Conflict(contract_no));
        }

        let id = self.allocate_id();
        let now = Utc::now();
        let contract = Contract {
            id,
            contract_no,
            status: ContractStatus::Draft,
            writer,
            sales_owner: draft.sales_owner,
            title: draft.effective_title(),
            customer_company: draft.customer_company.clone(),
            customer_manager: draft.customer_manager.clone(),
            customer_phone: draft.customer_phone.clone(),
            customer_email: draft.customer_email.clone(),
            ship_item: draft.ship_item.clone(),
            ship_date: draft.ship_date,
            ship_addr: draft.ship_addr.clone(),
            ship_phone: draft.ship_phone.clone(),
            collect_invoice_date: draft.collect_invoice_date,
            collect_date: draft.collect_date,
            collect_note: draft.collect_note.clone(),
            special_note: draft.special_note.clone(),
            created_at: now,
            updated_at: now,
        };

        tables.rows.insert(id, contract.clone());
        tables.seq_index.insert((year, seq), id);
        tables.no_index.insert(contract_no, id);
        tables.seq_high_water.insert(year, seq);

        // Item batch lands before the lock is released so no reader
        // sees the row without its lines.
        let lines: Vec<ContractItem> = draft
            .items
            .iter()
            .cloned()
            .map(|input| input.into_item(id))
            .collect();
        if !lines.is_empty() {
            self.items.insert(id, lines);
        }

        tracing::debug!(
            contract_id = id.as_u64(),
            contract_no = %contract_no,
            "contract row inserted"
        );
        Ok(contract)
    }

    fn max_seq(&self, year: Year) -> Result<Option<Seq>> {
        Ok(self.tables.read().seq_high_water.get(&year).copied())
    }

    fn get(&self, id: ContractId) -> Result<Option<Contract>> {
        Ok(self.tables.read().rows.get(&id).cloned())
    }

    fn items(&self, id: ContractId) -> Result<Vec<ContractItem>> {
        Ok(self
            .items
            .get(&id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn list(&self) -> Result<Vec<Contract>> {
        let tables = self.tables.read();
        // Ids are dense and monotonic, so reverse id order is newest
        // first.
        Ok(tables.rows.values().rev().cloned().collect())
    }

    fn update_status(
        &self,
        id: ContractId,
        op: Operation,
        expected: ContractStatus,
        next: ContractStatus,
    ) -> Result<Contract> {
        let mut tables = self.tables.write();
        let row = tables.rows.get_mut(&id).ok_or(Error::NotFound(id))?;

        // Precondition re-checked against the latest committed row,
        // not whatever the caller read earlier.
        if row.status != expected {
            return Err(Error::InvalidState {
                id,
                op,
                current: row.status,
                required: expected,
            });
        }

        row.status = next;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    fn update_content(
        &self,
        id: ContractId,
        patch: &ContractPatch,
        items: Option<Vec<ItemInput>>,
    ) -> Result<Contract> {
        let mut tables = self.tables.write();
        let row = tables.rows.get_mut(&id).ok_or(Error::NotFound(id))?;

        patch.apply(row);
        row.updated_at = Utc::now();
        let updated = row.clone();

        // Batch swapped before the lock is released, like
        // allocate_insert: no reader sees the patched row with the
        // stale lines, and a concurrent delete cannot interleave and
        // leave items behind for a dead id.
        if let Some(inputs) = items {
            let lines: Vec<ContractItem> = inputs
                .into_iter()
                .map(|input| input.into_item(id))
                .collect();
            if lines.is_empty() {
                self.items.remove(&id);
            } else {
                self.items.insert(id, lines);
            }
        }
        Ok(updated)
    }

    fn delete(&self, id: ContractId) -> Result<Contract> {
        let mut tables = self.tables.write();
        let row = tables.rows.remove(&id).ok_or(Error::NotFound(id))?;

        let year = row.contract_no.year();
        let seq = row.contract_no.seq();
        tables.seq_index.remove(&(year, seq));
        tables.no_index.remove(&row.contract_no);
        // seq_high_water deliberately untouched: the number is burned.

        self.items.remove(&id);

        tracing::debug!(
            contract_id = id.as_u64(),
            contract_no = %row.contract_no,
            "contract row deleted"
        );
        Ok(row)
    }
}
