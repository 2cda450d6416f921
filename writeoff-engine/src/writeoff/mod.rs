//! Write-off core
//!
//! Drives a cancelled invoice's balance to zero through bounded line-item
//! adjustments:
//!
//! - `candidates`: orders the adjustable line items and tax sub-items
//! - `allocator`: the zero-seeking allocation pass
//! - `comment`: cancellation-source audit comments
//! - `batcher`: chunked, sequential submission to the ledger
//! - `classifier`: separates benign rejections from real failures
//! - `runner`: per-invoice orchestration and failure aggregation

pub mod allocator;
pub mod batcher;
pub mod candidates;
pub mod classifier;
pub mod comment;
pub mod money;
pub mod runner;

pub use allocator::{Allocation, AllocationContext, allocate};
pub use batcher::SubmissionBatcher;
pub use candidates::{AdjustmentCandidate, build_candidates};
pub use classifier::classify_results;
pub use comment::cancellation_comment;
pub use runner::WriteOffJob;
