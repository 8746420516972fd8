//! Contract domain entities
//!
//! The central `Contract` record, its owned `ContractItem` lines, and
//! the input shapes used at creation (`ContractDraft`) and edit
//! (`ContractPatch`, `ItemInput`) time.
//!
//! Line totals are always recomputed here from quantity and unit
//! price; callers cannot persist an inconsistent total.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ActorId, ContractId, ContractNo, ContractStatus};

/// VAT treatment of a contract line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VatMode {
    /// VAT charged on top of the listed price
    #[default]
    Separate,
    /// Listed price already includes VAT
    Included,
    /// VAT-exempt line
    Exempt,
}

/// A sales contract moving through the approval workflow
///
/// Identity is two-fold: the store-assigned numeric `id` and the
/// human-readable `contract_no`. Both are immutable once assigned.
/// `status` only ever moves forward; content fields are mutated by
/// edits, `status` only by the transition operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Store-assigned numeric id
    pub id: ContractId,
    /// Human-readable number, `{year}DJ{seq}`
    pub contract_no: ContractNo,
    /// Workflow state
    pub status: ContractStatus,
    /// Creating account; immutable once set
    pub writer: ActorId,
    /// Responsible salesperson; reassignable, may be unset
    pub sales_owner: Option<ActorId>,

    /// Display title; defaults to the customer company name
    pub title: String,
    /// Customer company name; required at creation
    pub customer_company: String,
    /// Customer contact person
    pub customer_manager: String,
    /// Customer contact phone
    pub customer_phone: String,
    /// Customer contact email
    pub customer_email: String,

    /// What is being shipped
    pub ship_item: String,
    /// Requested shipping date
    pub ship_date: Option<NaiveDate>,
    /// Shipping address
    pub ship_addr: String,
    /// Shipping contact phone
    pub ship_phone: String,

    /// Tax-invoice issue date for collection
    pub collect_invoice_date: Option<NaiveDate>,
    /// Expected payment collection date
    pub collect_date: Option<NaiveDate>,
    /// Collection memo
    pub collect_note: String,
    /// Free-form remarks
    pub special_note: String,

    /// Creation time (UTC)
    pub created_at: DateTime<Utc>,
    /// Last content or status change (UTC)
    pub updated_at: DateTime<Utc>,
}

/// One line of goods/services on a contract
///
/// Owned exclusively by its contract: replaced as a batch on edit,
/// removed when the contract is deleted. Amounts are integer KRW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractItem {
    /// Owning contract
    pub contract_id: ContractId,
    /// Product or service name
    pub name: String,
    /// Quantity
    pub qty: u32,
    /// Specification / model designation
    pub spec: String,
    /// Sell price per unit
    pub sell_unit: i64,
    /// Sell total, `qty * sell_unit`
    pub sell_total: i64,
    /// Buy price per unit
    pub buy_unit: i64,
    /// Buy total, `qty * buy_unit`
    pub buy_total: i64,
    /// Supplying vendor
    pub vendor: String,
    /// VAT treatment
    pub vat_mode: VatMode,
}

/// Caller-supplied shape of one contract line
///
/// Totals are not accepted from callers; they are derived when the
/// batch is materialized into `ContractItem` rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemInput {
    /// Product or service name
    pub name: String,
    /// Quantity
    pub qty: u32,
    /// Specification / model designation
    pub spec: String,
    /// Sell price per unit
    pub sell_unit: i64,
    /// Buy price per unit
    pub buy_unit: i64,
    /// Supplying vendor
    pub vendor: String,
    /// VAT treatment
    pub vat_mode: VatMode,
}

impl ItemInput {
    /// Materialize into an owned line with recomputed totals
    pub fn into_item(self, contract_id: ContractId) -> ContractItem {
        let qty = i64::from(self.qty);
        ContractItem {
            contract_id,
            name: self.name,
            qty: self.qty,
            spec: self.spec,
            sell_unit: self.sell_unit,
            sell_total: qty * self.sell_unit,
            buy_unit: self.buy_unit,
            buy_total: qty * self.buy_unit,
            vendor: self.vendor,
            vat_mode: self.vat_mode,
        }
    }
}

/// Initial content of a contract being created
///
/// `customer_company` is the only required display field; a blank
/// title falls back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContractDraft {
    /// Display title; blank means "use the customer company name"
    pub title: String,
    /// Customer company name; required
    pub customer_company: String,
    /// Customer contact person
    pub customer_manager: String,
    /// Customer contact phone
    pub customer_phone: String,
    /// Customer contact email
    pub customer_email: String,
    /// What is being shipped
    pub ship_item: String,
    /// Requested shipping date
    pub ship_date: Option<NaiveDate>,
    /// Shipping address
    pub ship_addr: String,
    /// Shipping contact phone
    pub ship_phone: String,
    /// Tax-invoice issue date for collection
    pub collect_invoice_date: Option<NaiveDate>,
    /// Expected payment collection date
    pub collect_date: Option<NaiveDate>,
    /// Collection memo
    pub collect_note: String,
    /// Free-form remarks
    pub special_note: String,
    /// Responsible salesperson
    pub sales_owner: Option<ActorId>,
    /// Initial line items
    pub items: Vec<ItemInput>,
}

impl ContractDraft {
    /// Effective title: the explicit title, or the customer company name
    pub fn effective_title(&self) -> String {
        if self.title.trim().is_empty() {
            self.customer_company.clone()
        } else {
            self.title.clone()
        }
    }
}

/// Partial content update applied by `edit`
///
/// `None` fields are left untouched. `sales_owner` is doubly optional
/// so an edit can also clear the assignment. `writer` and `status`
/// are not patchable; status changes only via the transition
/// operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContractPatch {
    /// New title
    pub title: Option<String>,
    /// New customer company name; must stay non-blank
    pub customer_company: Option<String>,
    /// New customer contact person
    pub customer_manager: Option<String>,
    /// New customer contact phone
    pub customer_phone: Option<String>,
    /// New customer contact email
    pub customer_email: Option<String>,
    /// New shipping item
    pub ship_item: Option<String>,
    /// New shipping date (Some(None) clears it)
    pub ship_date: Option<Option<NaiveDate>>,
    /// New shipping address
    pub ship_addr: Option<String>,
    /// New shipping contact phone
    pub ship_phone: Option<String>,
    /// New tax-invoice issue date (Some(None) clears it)
    pub collect_invoice_date: Option<Option<NaiveDate>>,
    /// New collection date (Some(None) clears it)
    pub collect_date: Option<Option<NaiveDate>>,
    /// New collection memo
    pub collect_note: Option<String>,
    /// New remarks
    pub special_note: Option<String>,
    /// Reassign (Some(Some(_))) or clear (Some(None)) the sales owner
    pub sales_owner: Option<Option<ActorId>>,
}

impl ContractPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &ContractPatch::default()
    }

    /// Apply to a contract's content fields
    ///
    /// Does not touch id, contract_no, status, writer or timestamps;
    /// the store owns those. A blank patched title falls back to the
    /// (possibly patched) customer company name.
    pub fn apply(&self, contract: &mut Contract) {
        if let Some(v) = &self.customer_company {
            contract.customer_company = v.clone();
        }
        if let Some(v) = &self.title {
            contract.title = v.clone();
        }
        if contract.title.trim().is_empty() {
            contract.title = contract.customer_company.clone();
        }
        if let Some(v) = &self.customer_manager {
            contract.customer_manager = v.clone();
        }
        if let Some(v) = &self.customer_phone {
            contract.customer_phone = v.clone();
        }
        if let Some(v) = &self.customer_email {
            contract.customer_email = v.clone();
        }
        if let Some(v) = &self.ship_item {
            contract.ship_item = v.clone();
        }
        if let Some(v) = self.ship_date {
            contract.ship_date = v;
        }
        if let Some(v) = &self.ship_addr {
            contract.ship_addr = v.clone();
        }
        if let Some(v) = &self.ship_phone {
            contract.ship_phone = v.clone();
        }
        if let Some(v) = self.collect_invoice_date {
            contract.collect_invoice_date = v;
        }
        if let Some(v) = self.collect_date {
            contract.collect_date = v;
        }
        if let Some(v) = &self.collect_note {
            contract.collect_note = v.clone();
        }
        if let Some(v) = &self.special_note {
            contract.special_note = v.clone();
        }
        if let Some(v) = self.sales_owner {
            contract.sales_owner = v;
        }
    }
}
