//! Shared types for the invoice write-off engine
//!
//! Common types used across the workspace: the ledger wire model
//! (invoices, line items, adjustments), job input/output records,
//! and the unified error type.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult};
pub use models::{
    ActionError, ActionResult, AdjustmentDirection, AdjustmentInstruction, AdjustmentSourceType,
    CancelSource, FailureRecord, Invoice, InvoiceItem, TaxationItem, WriteOffRequest,
};
