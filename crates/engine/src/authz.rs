//! Authorization decision table
//!
//! The whole role/ownership matrix lives in two functions instead of
//! booleans scattered through the operations:
//!
//! - `allowed(op, tier, relation)`: may this tier, in this ownership
//!   relation to the contract, perform the operation at all?
//! - `required_state(op, tier)`: which status, if any, must the
//!   contract be in for this tier?
//!
//! The matrix encodes the approval chain: an employee hands in their
//! own work, Director and above push it forward, only President and
//! above finish it. `begin_processing` is deliberately role-checked
//! for everyone.
//!
//! | op | Employee | Director | President | Admin |
//! |---|---|---|---|---|
//! | submit | writer only | yes | yes | yes |
//! | begin_processing | no | yes | yes | yes |
//! | complete | no | no | yes | yes |
//! | delete | writer + draft | yes, any state | yes | yes |
//! | edit | writer + draft | yes, any state | yes | yes |

use dealdesk_core::{AccessTier, ActorId, Contract, ContractStatus, Operation};

/// Ownership relation between an actor and a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The actor created the contract
    Writer,
    /// Anyone else
    Other,
}

impl Relation {
    /// Relation of `actor` to `contract`
    pub fn of(actor: ActorId, contract: &Contract) -> Self {
        if contract.writer == actor {
            Relation::Writer
        } else {
            Relation::Other
        }
    }
}

/// Role/ownership half of the decision table
///
/// State preconditions are checked separately (see
/// [`required_state`]); this answers only "may this actor ever do
/// this to this contract".
pub fn allowed(op: Operation, tier: AccessTier, relation: Relation) -> bool {
    match (op, relation) {
        // An employee hands in their own draft; elevated tiers may
        // submit on anyone's behalf.
        (Operation::Submit, Relation::Writer) => true,
        (Operation::Submit, Relation::Other) => tier.is_elevated(),

        // Pushing into processing is approver work, ownership is
        // irrelevant.
        (Operation::BeginProcessing, _) => tier.is_elevated(),

        // Only the most senior tier closes a contract out.
        (Operation::Complete, _) => tier.can_finalize(),

        // Self-service on own records; elevated tiers unrestricted.
        (Operation::Delete | Operation::Edit, Relation::Writer) => true,
        (Operation::Delete | Operation::Edit, Relation::Other) => tier.is_elevated(),
    }
}

/// State half of the decision table
///
/// Some(status): the contract must be in exactly that status for this
/// tier. None: any status is acceptable. The three transitions have a
/// fixed precondition for every tier; delete and edit are
/// draft-gated only for the self-service tier.
pub fn required_state(op: Operation, tier: AccessTier) -> Option<ContractStatus> {
    match op {
        Operation::Submit => Some(ContractStatus::Draft),
        Operation::BeginProcessing => Some(ContractStatus::Submitted),
        Operation::Complete => Some(ContractStatus::Processing),
        Operation::Delete | Operation::Edit => {
            if tier.is_elevated() {
                None
            } else {
                Some(ContractStatus::Draft)
            }
        }
    }
}
