//! Core identifier and enum types for Dealdesk
//!
//! This module defines the foundational types:
//! - ContractId / ActorId: dense numeric identifiers
//! - Year / Seq: components of the per-year contract sequence
//! - ContractNo: human-readable contract number derived from (year, seq)
//! - ContractStatus: the approval workflow states
//! - AccessTier: the actor's authorization level
//! - Operation: the gated operations on a contract

use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal numeric identifier for a contract
///
/// Assigned by the store at insert time, immutable afterwards.
/// Dense and monotonically increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContractId(u64);

impl ContractId {
    /// Wrap a raw id (store-assigned)
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of an account acting on (or owning) contracts
///
/// Accounts live outside this core; we only carry their id and
/// access tier into authorization decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    /// Wrap a raw account id
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar year a contract was created in
///
/// Scopes the contract sequence: numbering restarts at 1 each year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(i32);

impl Year {
    /// Wrap a calendar year
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Year of the given date
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self(date.year())
    }

    /// Current year (UTC clock)
    pub fn current() -> Self {
        use chrono::Datelike;
        Self(chrono::Utc::now().year())
    }

    /// Get the raw year value
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-year sequence number, starting at 1
///
/// Assigned in allocation commit order. Gaps are possible (a creation
/// that rolled back), duplicates are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seq(u32);

impl Seq {
    /// First sequence number of a year
    pub const FIRST: Seq = Seq(1);

    /// Wrap a raw sequence number
    pub const fn from_raw(seq: u32) -> Self {
        Self(seq)
    }

    /// The following sequence number
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw numeric value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable contract number: `{year}DJ{seq}`
///
/// Derived deterministically from `(year, seq)` at creation, e.g.
/// `2025DJ1`. Never user-supplied, unique forever, and never reused
/// even after the owning contract is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContractNo {
    year: Year,
    seq: Seq,
}

impl ContractNo {
    /// Compose a contract number from its parts
    pub const fn new(year: Year, seq: Seq) -> Self {
        Self { year, seq }
    }

    /// Creation year component
    pub fn year(&self) -> Year {
        self.year
    }

    /// Per-year sequence component
    pub fn seq(&self) -> Seq {
        self.seq
    }

    /// Parse the `{year}DJ{seq}` display form
    ///
    /// Returns None if the string is not a well-formed contract number.
    pub fn from_string(s: &str) -> Option<Self> {
        let (year, seq) = s.split_once("DJ")?;
        let year: i32 = year.parse().ok()?;
        let seq: u32 = seq.parse().ok()?;
        if seq == 0 {
            return None;
        }
        Some(Self {
            year: Year::new(year),
            seq: Seq::from_raw(seq),
        })
    }
}

impl fmt::Display for ContractNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}DJ{}", self.year, self.seq)
    }
}

/// Approval workflow state of a contract
///
/// Strictly linear and forward-only:
/// Draft → Submitted → Processing → Completed.
/// The derived ordering follows the workflow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Being written by its creator; freely editable and deletable
    Draft,
    /// Handed in for approval
    Submitted,
    /// Accepted for processing by an approver
    Processing,
    /// Finalized by the most senior tier; terminal
    Completed,
}

impl ContractStatus {
    /// The single legal successor state, None for the terminal state
    pub fn successor(&self) -> Option<ContractStatus> {
        match self {
            ContractStatus::Draft => Some(ContractStatus::Submitted),
            ContractStatus::Submitted => Some(ContractStatus::Processing),
            ContractStatus::Processing => Some(ContractStatus::Completed),
            ContractStatus::Completed => None,
        }
    }

    /// Stable lowercase name, matching the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Submitted => "submitted",
            ContractStatus::Processing => "processing",
            ContractStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access tier of an acting account
///
/// Derived from the account's profile by the excluded account layer;
/// this core only reads it. The derived ordering is seniority:
/// Employee < Director < President < Admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    /// Self-service tier: own drafts only
    Employee,
    /// Approving tier: may move submitted contracts into processing
    Director,
    /// Finalizing tier
    President,
    /// Superuser-equivalent; everything President can do
    Admin,
}

impl AccessTier {
    /// Director and above
    ///
    /// Elevated tiers bypass the ownership checks that bind employees.
    pub fn is_elevated(&self) -> bool {
        *self >= AccessTier::Director
    }

    /// President and above; the only tiers that may complete a contract
    pub fn can_finalize(&self) -> bool {
        *self >= AccessTier::President
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessTier::Employee => "employee",
            AccessTier::Director => "director",
            AccessTier::President => "president",
            AccessTier::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// An acting account: identity plus access tier
///
/// External state read by the authorization check; never mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Account id
    pub id: ActorId,
    /// Authorization level derived from the account's profile
    pub tier: AccessTier,
}

impl Actor {
    /// Create an actor
    pub fn new(id: ActorId, tier: AccessTier) -> Self {
        Self { id, tier }
    }
}

/// The gated operations on a contract
///
/// Each is a distinct operation with its own precondition state and
/// authorization rule; there is no generic "set status" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Draft → Submitted
    Submit,
    /// Submitted → Processing
    BeginProcessing,
    /// Processing → Completed
    Complete,
    /// Terminal removal (not a state)
    Delete,
    /// Content mutation; leaves status untouched
    Edit,
}

impl Operation {
    /// Precondition / postcondition pair for the three state moves
    ///
    /// None for Delete and Edit, which are not state transitions.
    pub fn transition(&self) -> Option<(ContractStatus, ContractStatus)> {
        match self {
            Operation::Submit => Some((ContractStatus::Draft, ContractStatus::Submitted)),
            Operation::BeginProcessing => {
                Some((ContractStatus::Submitted, ContractStatus::Processing))
            }
            Operation::Complete => Some((ContractStatus::Processing, ContractStatus::Completed)),
            Operation::Delete | Operation::Edit => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Submit => "submit",
            Operation::BeginProcessing => "begin_processing",
            Operation::Complete => "complete",
            Operation::Delete => "delete",
            Operation::Edit => "edit",
        };
        f.write_str(name)
    }
}
