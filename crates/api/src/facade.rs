//! The `Dealdesk` facade
//!
//! The one entry point the presentation layer talks to. Every method
//! is one engine call; the facade adds nothing but wiring. Reached
//! exclusively via in-process calls: no wire protocol, no CLI.

use std::sync::Arc;

use dealdesk_core::{
    Actor, ActorId, Contract, ContractDraft, ContractId, ContractItem, ContractPatch,
    ContractStore, ItemInput, Result, Seq, Year,
};
use dealdesk_engine::{LifecycleManager, SequenceAllocator};
use dealdesk_storage::MemStore;

use crate::config::DealdeskConfig;

/// Embeddable contract workflow service
///
/// Generic over the storage backend; `Dealdesk::in_memory()` gives
/// the common embedded setup. Cheap to clone and safe to share across
/// request threads.
///
/// # Example
///
/// ```ignore
/// use dealdesk_api::Dealdesk;
/// use dealdesk_core::{Actor, AccessTier, ActorId, ContractDraft};
///
/// let desk = Dealdesk::in_memory();
/// let writer = ActorId::from_raw(1);
/// let draft = ContractDraft {
///     customer_company: "Acme Co".into(),
///     ..Default::default()
/// };
/// let contract = desk.create_contract(writer, &draft)?;
/// desk.submit(contract.id, Actor::new(writer, AccessTier::Employee))?;
/// ```
#[derive(Debug)]
pub struct Dealdesk<S = MemStore> {
    store: Arc<S>,
    allocator: SequenceAllocator<S>,
    lifecycle: LifecycleManager<S>,
}

impl<S> Clone for Dealdesk<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            allocator: self.allocator.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl Dealdesk<MemStore> {
    /// Create a desk over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemStore::new()))
    }

    /// Create a desk over a fresh in-memory store with custom config
    pub fn in_memory_with_config(config: DealdeskConfig) -> Self {
        Self::with_store_and_config(Arc::new(MemStore::new()), config)
    }
}

impl<S: ContractStore> Dealdesk<S> {
    /// Create a desk over an existing store with default config
    pub fn with_store(store: Arc<S>) -> Self {
        Self::with_store_and_config(store, DealdeskConfig::default())
    }

    /// Create a desk over an existing store
    pub fn with_store_and_config(store: Arc<S>, config: DealdeskConfig) -> Self {
        let allocator = SequenceAllocator::new(Arc::clone(&store))
            .with_retry(config.retry.clone())
            .with_limits(config.limits.clone());
        let lifecycle = LifecycleManager::new(Arc::clone(&store)).with_limits(config.limits);
        Self {
            store,
            allocator,
            lifecycle,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Create a contract in the current year
    ///
    /// Allocates the next `{year}DJ{seq}` number and persists the row
    /// in `Draft` with its item batch. Fails with `Error::Validation`
    /// when the customer company name is blank.
    pub fn create_contract(&self, writer: ActorId, draft: &ContractDraft) -> Result<Contract> {
        self.allocator.create(writer, draft)
    }

    /// Create a contract dated in an explicit year
    pub fn create_contract_in(
        &self,
        year: Year,
        writer: ActorId,
        draft: &ContractDraft,
    ) -> Result<Contract> {
        self.allocator.create_in_year(year, writer, draft)
    }

    /// Draft → Submitted (writer or elevated tier)
    pub fn submit(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.lifecycle.submit(id, actor)
    }

    /// Submitted → Processing (Director tier and above)
    pub fn begin_processing(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.lifecycle.begin_processing(id, actor)
    }

    /// Processing → Completed (President tier and above)
    pub fn complete(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.lifecycle.complete(id, actor)
    }

    /// Delete a contract, cascading to its line items
    pub fn delete_contract(&self, id: ContractId, actor: Actor) -> Result<()> {
        self.lifecycle.delete(id, actor)
    }

    /// Edit content fields and optionally replace the item batch
    pub fn edit_contract(
        &self,
        id: ContractId,
        actor: Actor,
        patch: &ContractPatch,
        items: Option<Vec<ItemInput>>,
    ) -> Result<Contract> {
        self.lifecycle.edit(id, actor, patch, items)
    }

    /// Fetch a contract by id
    pub fn get_contract(&self, id: ContractId) -> Result<Contract> {
        self.lifecycle.get(id)
    }

    /// Line items of a contract
    pub fn contract_items(&self, id: ContractId) -> Result<Vec<ContractItem>> {
        self.lifecycle.items(id)
    }

    /// All contracts, newest first
    pub fn list_contracts(&self) -> Result<Vec<Contract>> {
        self.lifecycle.list()
    }

    /// Highest sequence allocated for a year, if any
    pub fn last_seq(&self, year: Year) -> Result<Option<Seq>> {
        self.store.max_seq(year)
    }
}
