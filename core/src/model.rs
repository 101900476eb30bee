//! Domain records and their field validation.
//!
//! RULE: validation happens at construction. A `New*` value that exists
//! is well-formed, so the store never re-checks fields before insert.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Row id assigned by the store on insert. Unique and immutable.
pub type RecordId = i64;

/// Sanity ceiling for an asset's annual return rate (1000%).
pub const ANNUAL_RETURN_CAP: f64 = 10.0;

/// Reasons a single row or field is rejected. These are soft failures:
/// the importer skips the row and the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    Missing(&'static str),

    #[error("'{0}' is not an email-shaped string")]
    BadEmail(String),

    #[error("total_slots must be positive, got {0}")]
    NonPositiveSlots(i64),

    #[error("annual_return {0} outside the range -1.0..={ANNUAL_RETURN_CAP}")]
    ReturnOutOfRange(f64),

    #[error("invested_amount must be non-negative, got {0}")]
    NegativeAmount(f64),
}

// ── Investor ───────────────────────────────────────────────────────

/// An investor as persisted, id included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// A validated investor row not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewInvestor {
    /// Validate the three required cells. Surrounding whitespace is
    /// trimmed; a cell that is empty after trimming counts as missing.
    pub fn new(name: &str, email: &str, phone_number: &str) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let phone_number = required("phone", phone_number)?;
        if !email_shaped(&email) {
            return Err(ValidationError::BadEmail(email));
        }
        Ok(Self {
            name,
            email,
            phone_number,
        })
    }
}

// ── Asset ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: RecordId,
    pub asset_name: String,
    pub asset_type: String,
    pub total_slots: i64,
    pub annual_return: f64,
}

/// A validated asset not yet persisted. Created administratively, not
/// by the importer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub asset_name: String,
    pub asset_type: String,
    pub total_slots: i64,
    pub annual_return: f64,
}

impl NewAsset {
    pub fn new(
        asset_name: &str,
        asset_type: &str,
        total_slots: i64,
        annual_return: f64,
    ) -> Result<Self, ValidationError> {
        let asset_name = required("asset_name", asset_name)?;
        let asset_type = required("asset_type", asset_type)?;
        if total_slots <= 0 {
            return Err(ValidationError::NonPositiveSlots(total_slots));
        }
        if !(-1.0..=ANNUAL_RETURN_CAP).contains(&annual_return) {
            return Err(ValidationError::ReturnOutOfRange(annual_return));
        }
        Ok(Self {
            asset_name,
            asset_type,
            total_slots,
            annual_return,
        })
    }
}

// ── Investment ─────────────────────────────────────────────────────

/// The many-to-many join between Investor and Asset, with an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: RecordId,
    pub investor_id: RecordId,
    pub asset_id: RecordId,
    pub invested_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestment {
    pub investor_id: RecordId,
    pub asset_id: RecordId,
    pub invested_amount: f64,
}

impl NewInvestment {
    /// Amount must be non-negative. Whether investor_id/asset_id exist
    /// is the store's concern — the foreign keys reject dangling ids.
    pub fn new(
        investor_id: RecordId,
        asset_id: RecordId,
        invested_amount: f64,
    ) -> Result<Self, ValidationError> {
        if invested_amount.is_nan() || invested_amount < 0.0 {
            return Err(ValidationError::NegativeAmount(invested_amount));
        }
        Ok(Self {
            investor_id,
            asset_id,
            invested_amount,
        })
    }
}

// ── Field checks ───────────────────────────────────────────────────

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(value.to_string())
}

/// "Email-shaped": one '@' with a non-empty local part and a domain
/// containing an interior dot. Not RFC validation.
fn email_shaped(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
