//! Zero-Seeking Allocator
//!
//! Single left-to-right pass over the ordered candidates that plans the
//! smallest instruction sequence driving the invoice balance to zero,
//! without ever crossing zero or exceeding the invoice's original amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::Signed;
use shared::models::{AdjustmentDirection, AdjustmentInstruction, Invoice};

use crate::writeoff::candidates::AdjustmentCandidate;
use crate::writeoff::money::is_settled;

/// Everything the allocator stamps onto an instruction besides the
/// per-candidate numbers
#[derive(Debug, Clone)]
pub struct AllocationContext {
    pub invoice_id: String,
    pub adjustment_date: NaiveDate,
    pub comment: String,
    pub reason_code: String,
}

/// Outcome of one allocation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Planned adjustments, in candidate order
    pub instructions: Vec<AdjustmentInstruction>,
    /// Balance left unplanned; zero (at 2 dp) on full success
    pub remaining_balance: Decimal,
}

impl Allocation {
    /// Whether the pass planned the balance all the way to zero
    pub fn is_complete(&self) -> bool {
        is_settled(self.remaining_balance)
    }
}

/// Plan adjustments for one invoice
///
/// Walks the candidates once, in order, keeping a running balance that
/// starts at `invoice.balance`:
///
/// - a candidate whose full capacity would land the balance on zero or
///   carry it across zero is clamped to exactly the remaining balance,
///   and the pass ends;
/// - a candidate whose full capacity keeps the balance on the same side of
///   zero and within the invoice's original `amount` is consumed whole;
/// - any other candidate is left untouched (consuming it would overshoot
///   the original amount without settling the invoice).
///
/// Candidates with zero capacity are skipped with no side effects, so no
/// zero-amount instruction is ever emitted. Exhausting the candidates with
/// a balance left over is a valid partial outcome, not an error.
pub fn allocate(
    invoice: &Invoice,
    candidates: &[AdjustmentCandidate],
    ctx: &AllocationContext,
) -> Allocation {
    let mut current = invoice.balance;
    let bound = invoice.amount;
    let mut instructions = Vec::new();

    for candidate in candidates {
        if is_settled(current) {
            break;
        }
        if candidate.capacity == Decimal::ZERO {
            continue;
        }

        let delta = match candidate.direction {
            AdjustmentDirection::Charge => candidate.capacity,
            AdjustmentDirection::Credit => -candidate.capacity,
        };
        let new_balance = current + delta;

        if new_balance == Decimal::ZERO || new_balance.signum() != current.signum() {
            // Landing on or crossing zero: clamp to the remaining balance
            instructions.push(instruction_for(candidate, current.abs(), ctx));
            current = Decimal::ZERO;
            break;
        } else if within_original_amount(new_balance, bound) {
            instructions.push(instruction_for(candidate, candidate.capacity, ctx));
            current = new_balance;
        }
        // else: full consumption would push past the original amount
        // without settling; leave the candidate unresolved
    }

    Allocation {
        instructions,
        remaining_balance: current,
    }
}

/// The running balance must stay within the invoice's original size:
/// same sign as `amount`, no larger in magnitude
fn within_original_amount(new_balance: Decimal, amount: Decimal) -> bool {
    new_balance.abs() <= amount.abs() && new_balance.signum() == amount.signum()
}

fn instruction_for(
    candidate: &AdjustmentCandidate,
    amount: Decimal,
    ctx: &AllocationContext,
) -> AdjustmentInstruction {
    AdjustmentInstruction {
        source_id: candidate.source_id.clone(),
        source_type: candidate.source_type,
        amount,
        direction: candidate.direction,
        invoice_id: ctx.invoice_id.clone(),
        adjustment_date: ctx.adjustment_date,
        comment: ctx.comment.clone(),
        reason_code: ctx.reason_code.clone(),
    }
}
