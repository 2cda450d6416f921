//! Ledger boundary: token issuance and the bulk-adjustment HTTP client

pub mod auth;
pub mod client;

pub use auth::{AccessToken, OAuthTokenProvider, TokenProvider};
pub use client::{AdjustmentLedger, InvoiceSource, LedgerClient};
