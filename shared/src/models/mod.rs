//! Ledger wire model and job records

mod adjustment;
mod invoice;
mod job;

pub use adjustment::{
    ActionError, ActionResult, AdjustmentDirection, AdjustmentInstruction, AdjustmentSourceType,
};
pub use invoice::{Invoice, InvoiceItem, TaxationItem};
pub use job::{CancelSource, FailureRecord, WriteOffRequest};
