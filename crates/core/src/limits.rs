//! Size limits for contract content
//!
//! Field-length and item-count caps enforced at creation and edit
//! time. Violations surface as `Error::Validation`. The defaults
//! mirror the column widths of the backing schema.

use crate::contract::{ContractDraft, ContractPatch, ItemInput};
use crate::error::{Error, Result};

/// Size limits for contract content
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum title length in characters (default: 200)
    pub max_title_len: usize,
    /// Maximum company / name / address field length (default: 300)
    pub max_name_len: usize,
    /// Maximum phone field length (default: 50)
    pub max_phone_len: usize,
    /// Maximum note field length (default: 500)
    pub max_note_len: usize,
    /// Maximum line items per contract (default: 200)
    pub max_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_title_len: 200,
            max_name_len: 300,
            max_phone_len: 50,
            max_note_len: 500,
            max_items: 200,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_title_len: 10,
            max_name_len: 10,
            max_phone_len: 8,
            max_note_len: 20,
            max_items: 3,
        }
    }

    fn check_len(&self, field: &str, value: &str, max: usize) -> Result<()> {
        if value.chars().count() > max {
            return Err(Error::Validation(format!(
                "{} exceeds {} characters",
                field, max
            )));
        }
        Ok(())
    }

    /// Validate an item batch
    pub fn validate_items(&self, items: &[ItemInput]) -> Result<()> {
        if items.len() > self.max_items {
            return Err(Error::Validation(format!(
                "too many line items: {} (max {})",
                items.len(),
                self.max_items
            )));
        }
        for item in items {
            self.check_len("item name", &item.name, self.max_name_len)?;
            self.check_len("item spec", &item.spec, self.max_name_len)?;
            self.check_len("item vendor", &item.vendor, self.max_name_len)?;
        }
        Ok(())
    }

    /// Validate a creation draft
    ///
    /// Requires a non-blank customer company name; everything else is
    /// optional but length-capped.
    pub fn validate_draft(&self, draft: &ContractDraft) -> Result<()> {
        if draft.customer_company.trim().is_empty() {
            return Err(Error::Validation(
                "customer company name is required".to_string(),
            ));
        }
        self.check_len("title", &draft.title, self.max_title_len)?;
        self.check_len("customer company", &draft.customer_company, self.max_name_len)?;
        self.check_len("customer manager", &draft.customer_manager, self.max_name_len)?;
        self.check_len("customer phone", &draft.customer_phone, self.max_phone_len)?;
        self.check_len("customer email", &draft.customer_email, self.max_name_len)?;
        self.check_len("ship item", &draft.ship_item, self.max_name_len)?;
        self.check_len("ship address", &draft.ship_addr, self.max_name_len)?;
        self.check_len("ship phone", &draft.ship_phone, self.max_phone_len)?;
        self.check_len("collect note", &draft.collect_note, self.max_note_len)?;
        self.check_len("special note", &draft.special_note, self.max_note_len)?;
        self.validate_items(&draft.items)
    }

    /// Validate an edit patch
    ///
    /// The customer company name may be changed but not blanked.
    pub fn validate_patch(&self, patch: &ContractPatch) -> Result<()> {
        if let Some(company) = &patch.customer_company {
            if company.trim().is_empty() {
                return Err(Error::Validation(
                    "customer company name cannot be blank".to_string(),
                ));
            }
            self.check_len("customer company", company, self.max_name_len)?;
        }
        if let Some(v) = &patch.title {
            self.check_len("title", v, self.max_title_len)?;
        }
        if let Some(v) = &patch.customer_manager {
            self.check_len("customer manager", v, self.max_name_len)?;
        }
        if let Some(v) = &patch.customer_phone {
            self.check_len("customer phone", v, self.max_phone_len)?;
        }
        if let Some(v) = &patch.customer_email {
            self.check_len("customer email", v, self.max_name_len)?;
        }
        if let Some(v) = &patch.ship_item {
            self.check_len("ship item", v, self.max_name_len)?;
        }
        if let Some(v) = &patch.ship_addr {
            self.check_len("ship address", v, self.max_name_len)?;
        }
        if let Some(v) = &patch.ship_phone {
            self.check_len("ship phone", v, self.max_phone_len)?;
        }
        if let Some(v) = &patch.collect_note {
            self.check_len("collect note", v, self.max_note_len)?;
        }
        if let Some(v) = &patch.special_note {
            self.check_len("special note", v, self.max_note_len)?;
        }
        Ok(())
    }
}
