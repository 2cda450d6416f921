//! Job Runner
//!
//! Runs the full write-off pipeline for a batch of invoices, one invoice at
//! a time. Failures are captured per invoice and the run keeps going; a
//! single aggregated error is raised only after every invoice has been
//! attempted.

use std::sync::Arc;

use shared::models::{FailureRecord, WriteOffRequest};
use shared::{AppError, AppResult};

use crate::core::Config;
use crate::ledger::{AdjustmentLedger, InvoiceSource, TokenProvider};
use crate::writeoff::allocator::{AllocationContext, allocate};
use crate::writeoff::batcher::SubmissionBatcher;
use crate::writeoff::candidates::build_candidates;
use crate::writeoff::classifier::classify_results;
use crate::writeoff::comment::cancellation_comment;
use crate::writeoff::money::is_settled;

/// End-to-end write-off job over one input batch
pub struct WriteOffJob {
    source: Arc<dyn InvoiceSource>,
    ledger: Arc<dyn AdjustmentLedger>,
    tokens: Arc<dyn TokenProvider>,
    batcher: SubmissionBatcher,
    reason_code: String,
}

impl WriteOffJob {
    pub fn new(
        source: Arc<dyn InvoiceSource>,
        ledger: Arc<dyn AdjustmentLedger>,
        tokens: Arc<dyn TokenProvider>,
        config: &Config,
    ) -> Self {
        Self {
            source,
            ledger,
            tokens,
            batcher: SubmissionBatcher::new(config.chunk_size),
            reason_code: config.reason_code.clone(),
        }
    }

    /// Process every invoice in the batch, sequentially
    ///
    /// One invoice's failure never aborts the run. Completes with `Ok(())`
    /// only when no invoice produced an unignorable failure; otherwise the
    /// returned error carries the JSON-serialized list of every failure.
    pub async fn run(&self, batch: &[WriteOffRequest]) -> AppResult<()> {
        tracing::info!(invoices = batch.len(), "Write-off run starting");

        let mut failures: Vec<FailureRecord> = Vec::new();
        for request in batch {
            match self.process_invoice(request).await {
                Ok(mut invoice_failures) => failures.append(&mut invoice_failures),
                Err(e) => {
                    tracing::error!(
                        invoice_id = %request.invoice_id,
                        error = %e,
                        "Invoice processing failed"
                    );
                    failures.push(FailureRecord {
                        invoice_id: request.invoice_id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        if failures.is_empty() {
            tracing::info!("Write-off run finished cleanly");
            return Ok(());
        }

        let payload = serde_json::to_string(&failures)
            .map_err(|e| AppError::internal(format!("Failed to serialize failures: {e}")))?;
        Err(AppError::WriteOffFailed(payload))
    }

    /// Plan, submit, and classify one invoice
    async fn process_invoice(&self, request: &WriteOffRequest) -> AppResult<Vec<FailureRecord>> {
        let invoice = self.source.load_invoice(&request.invoice_id).await?;

        if is_settled(invoice.balance) {
            tracing::info!(invoice_id = %invoice.id, "Balance already settled, nothing to adjust");
            return Ok(Vec::new());
        }

        let items = self.source.adjustable_items(&invoice.id).await?;
        let candidates = build_candidates(&items);

        let ctx = AllocationContext {
            invoice_id: invoice.id.clone(),
            adjustment_date: shared::util::today(),
            comment: cancellation_comment(request.cancel_source).to_string(),
            reason_code: self.reason_code.clone(),
        };
        let allocation = allocate(&invoice, &candidates, &ctx);

        if !allocation.is_complete() {
            // Accepted terminal outcome: capacity ran out before the balance
            tracing::warn!(
                invoice_id = %invoice.id,
                remaining = %allocation.remaining_balance,
                "Available capacity leaves a partial balance"
            );
        }
        if allocation.instructions.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(
            invoice_id = %invoice.id,
            adjustments = allocation.instructions.len(),
            "Submitting write-off adjustments"
        );
        let results = self
            .batcher
            .submit(
                self.ledger.as_ref(),
                self.tokens.as_ref(),
                &allocation.instructions,
            )
            .await?;

        Ok(classify_results(&invoice.id, &results))
    }
}
