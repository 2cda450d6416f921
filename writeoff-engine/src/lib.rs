//! Invoice Write-Off Engine
//!
//! Batch job that drives cancelled-subscription invoice balances to zero by
//! submitting bounded line-item adjustments to the billing ledger.
//!
//! # Module structure
//!
//! ```text
//! writeoff-engine/src/
//! ├── core/      # configuration, bootstrap
//! ├── ledger/    # token issuance, ledger HTTP client
//! ├── writeoff/  # candidates, allocator, batcher, classifier, runner
//! └── utils/     # logging
//! ```

pub mod core;
pub mod ledger;
pub mod utils;
pub mod writeoff;

// Re-export public types
pub use crate::core::{Config, setup_environment};
pub use ledger::{
    AccessToken, AdjustmentLedger, InvoiceSource, LedgerClient, OAuthTokenProvider, TokenProvider,
};
pub use shared::{AppError, AppResult};
pub use writeoff::{
    Allocation, AllocationContext, SubmissionBatcher, WriteOffJob, allocate, build_candidates,
    cancellation_comment, classify_results,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
