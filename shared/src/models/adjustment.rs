//! Invoice-item adjustment objects for the ledger's bulk action endpoint
//!
//! The action endpoint speaks the ledger's object wire format (PascalCase
//! field names), unlike the camelCase read endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which record an adjustment targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdjustmentSourceType {
    /// The invoice line item itself
    InvoiceDetail,
    /// A tax sub-item of a line item
    Tax,
}

/// Direction of an adjustment relative to the invoice balance
///
/// A `Credit` reduces a positive balance; a `Charge` raises a negative one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdjustmentDirection {
    Credit,
    Charge,
}

/// A single invoice-item adjustment, ready for the bulk create call
///
/// Produced by the allocator, submitted once by the batcher, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustmentInstruction {
    /// ID of the line item or taxation item being adjusted
    pub source_id: String,
    pub source_type: AdjustmentSourceType,
    /// Unsigned magnitude. Never exceeds the source's available-to-adjust
    /// amount; inherits the source precision (not rounded).
    pub amount: Decimal,
    /// The ledger calls the direction field `Type` on the wire
    #[serde(rename = "Type")]
    pub direction: AdjustmentDirection,
    pub invoice_id: String,
    pub adjustment_date: NaiveDate,
    /// Audit comment derived from the cancellation source
    pub comment: String,
    pub reason_code: String,
}

/// Per-object result of a bulk action call
///
/// The response array length and order correspond to the request chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ActionResult {
    /// ID of the created adjustment, present on success
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    /// Populated when `success` is false
    #[serde(default)]
    pub errors: Option<Vec<ActionError>>,
}

/// One error attached to a failed action result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ActionError {
    pub code: String,
    pub message: String,
}
