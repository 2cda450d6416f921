//! Invoice records as read from the ledger

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice as returned by the ledger's read endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Ledger invoice ID
    pub id: String,
    /// Owning account number
    pub account_number: String,
    /// Outstanding balance. Positive for a debit invoice, negative for a
    /// credit memo; a positive invoice is only ever reduced toward zero and
    /// a negative one only increased toward zero.
    pub balance: Decimal,
    /// Original invoice total. Adjustments must never push the running
    /// balance past this bound.
    pub amount: Decimal,
}

/// One adjustable invoice line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Line item ID
    pub id: String,
    /// Remaining signed magnitude this item may still be adjusted by.
    /// The sign indicates which way consuming it moves the balance.
    pub available_to_adjust_amount: Decimal,
    /// Tax sub-items, adjusted independently but always considered
    /// right after their parent line item.
    #[serde(default)]
    pub taxation_items: Vec<TaxationItem>,
}

/// Tax sub-item belonging to a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxationItem {
    /// Taxation item ID
    pub id: String,
    /// Remaining signed adjustable amount
    pub available_to_adjust_amount: Decimal,
}
