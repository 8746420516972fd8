//! Contract lifecycle manager
//!
//! Owns the forward-only state machine
//! Draft → Submitted → Processing → Completed and the gated
//! operations on it. Every operation follows the same shape:
//! load → authorization → precondition → commit, with the
//! precondition re-checked by the store's compare-and-set update at
//! the moment of commit, so a race with another actor loses cleanly
//! with `InvalidState` instead of regressing the machine.
//!
//! Successful transitions touch only the status field; concurrent
//! content edits to unrelated fields are never clobbered, and no
//! cascading changes hit the line items.

use std::sync::Arc;

use dealdesk_core::{
    Actor, Contract, ContractId, ContractItem, ContractPatch, ContractStore, Error, ItemInput,
    Limits, Operation, Result,
};
use tracing::{debug, info};

use crate::authz::{self, Relation};

/// Role-gated operations on persisted contracts
///
/// Cheap to clone; shares the store.
#[derive(Debug)]
pub struct LifecycleManager<S> {
    store: Arc<S>,
    limits: Limits,
}

impl<S> Clone for LifecycleManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            limits: self.limits.clone(),
        }
    }
}

impl<S: ContractStore> LifecycleManager<S> {
    /// Create a manager over `store` with default content limits
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            limits: Limits::default(),
        }
    }

    /// Replace the content limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Draft → Submitted
    ///
    /// The writer hands in their own draft; elevated tiers may submit
    /// on anyone's behalf.
    pub fn submit(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.transition(id, actor, Operation::Submit)
    }

    /// Submitted → Processing
    ///
    /// Approver work: Director tier and above, ownership irrelevant.
    pub fn begin_processing(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.transition(id, actor, Operation::BeginProcessing)
    }

    /// Processing → Completed
    ///
    /// President tier and above only.
    pub fn complete(&self, id: ContractId, actor: Actor) -> Result<Contract> {
        self.transition(id, actor, Operation::Complete)
    }

    fn transition(&self, id: ContractId, actor: Actor, op: Operation) -> Result<Contract> {
        let Some((required, next)) = op.transition() else {
            return Err(Error::Storage(format!("{} is not a state transition", op)));
        };

        let contract = self.store.get(id)?.ok_or(Error::NotFound(id))?;
        debug!(
            contract_id = id.as_u64(),
            op = %op,
            actor_id = actor.id.as_u64(),
            from = %contract.status,
            "transition attempt"
        );

        // Role before state: an actor who could never perform this
        // operation is told so even when the contract is also in the
        // wrong state.
        if !authz::allowed(op, actor.tier, Relation::of(actor.id, &contract)) {
            return Err(Error::Forbidden {
                id,
                op,
                actor_id: actor.id.as_u64(),
            });
        }

        if contract.status != required {
            return Err(Error::InvalidState {
                id,
                op,
                current: contract.status,
                required,
            });
        }

        // CAS: the store re-checks `required` against the latest
        // committed row before writing `next`.
        let updated = self.store.update_status(id, op, required, next)?;
        info!(
            contract_id = id.as_u64(),
            contract_no = %updated.contract_no,
            actor_id = actor.id.as_u64(),
            from = %required,
            to = %next,
            "contract transitioned"
        );
        Ok(updated)
    }

    /// Remove a contract, cascading to its line items
    ///
    /// Elevated tiers delete from any state; an employee deletes only
    /// their own drafts. The burned sequence stays burned.
    pub fn delete(&self, id: ContractId, actor: Actor) -> Result<()> {
        let contract = self.store.get(id)?.ok_or(Error::NotFound(id))?;
        let op = Operation::Delete;

        if !authz::allowed(op, actor.tier, Relation::of(actor.id, &contract)) {
            return Err(Error::Forbidden {
                id,
                op,
                actor_id: actor.id.as_u64(),
            });
        }
        if let Some(required) = authz::required_state(op, actor.tier) {
            if contract.status != required {
                return Err(Error::InvalidState {
                    id,
                    op,
                    current: contract.status,
                    required,
                });
            }
        }

        let removed = self.store.delete(id)?;
        info!(
            contract_id = id.as_u64(),
            contract_no = %removed.contract_no,
            actor_id = actor.id.as_u64(),
            "contract deleted"
        );
        Ok(())
    }

    /// Mutate content fields and optionally replace the item batch
    ///
    /// Gated like delete: draft-and-writer for employees, always for
    /// elevated tiers. Never changes the status; the transition
    /// operations are the only writers of that field.
    pub fn edit(
        &self,
        id: ContractId,
        actor: Actor,
        patch: &ContractPatch,
        items: Option<Vec<ItemInput>>,
    ) -> Result<Contract> {
        self.limits.validate_patch(patch)?;
        if let Some(batch) = &items {
            self.limits.validate_items(batch)?;
        }

        let contract = self.store.get(id)?.ok_or(Error::NotFound(id))?;
        let op = Operation::Edit;

        if !authz::allowed(op, actor.tier, Relation::of(actor.id, &contract)) {
            return Err(Error::Forbidden {
                id,
                op,
                actor_id: actor.id.as_u64(),
            });
        }
        if let Some(required) = authz::required_state(op, actor.tier) {
            if contract.status != required {
                return Err(Error::InvalidState {
                    id,
                    op,
                    current: contract.status,
                    required,
                });
            }
        }

        let updated = self.store.update_content(id, patch, items)?;
        debug!(
            contract_id = id.as_u64(),
            actor_id = actor.id.as_u64(),
            "contract content updated"
        );
        Ok(updated)
    }

    /// Fetch a contract
    pub fn get(&self, id: ContractId) -> Result<Contract> {
        self.store.get(id)?.ok_or(Error::NotFound(id))
    }

    /// Line items of a contract
    pub fn items(&self, id: ContractId) -> Result<Vec<ContractItem>> {
        // Distinguish "no items" from "no contract".
        self.get(id)?;
        self.store.items(id)
    }

    /// All contracts, newest first
    pub fn list(&self) -> Result<Vec<Contract>> {
        self.store.list()
    }
}
