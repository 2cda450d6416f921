//! Submission Batcher
//!
//! Splits one invoice's planned instructions into chunks bounded by the
//! ledger's per-request object limit and submits them sequentially, in
//! order. Adjustments for the same invoice must land in allocation order,
//! so chunks are never submitted concurrently.

use shared::AppResult;
use shared::models::{ActionResult, AdjustmentInstruction};

use crate::ledger::{AdjustmentLedger, TokenProvider};

/// Chunked, sequential submitter for one invoice's instructions
pub struct SubmissionBatcher {
    chunk_size: usize,
}

impl SubmissionBatcher {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Submit all instructions, at most `chunk_size` per ledger call
    ///
    /// A fresh access token is fetched before every chunk; there is no
    /// caching across chunks. Returns the concatenated per-item results in
    /// submission order. An empty instruction list makes no ledger calls.
    pub async fn submit(
        &self,
        ledger: &dyn AdjustmentLedger,
        tokens: &dyn TokenProvider,
        instructions: &[AdjustmentInstruction],
    ) -> AppResult<Vec<ActionResult>> {
        let mut results = Vec::with_capacity(instructions.len());

        for chunk in instructions.chunks(self.chunk_size) {
            let token = tokens.access_token().await?;
            let chunk_results = ledger.create_adjustments(&token, chunk).await?;
            tracing::debug!(
                submitted = chunk.len(),
                rejected = chunk_results.iter().filter(|r| !r.success).count(),
                "Submitted adjustment chunk"
            );
            results.extend(chunk_results);
        }

        Ok(results)
    }
}
