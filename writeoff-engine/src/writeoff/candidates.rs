//! Candidate Builder
//!
//! Pure transform from one invoice's line items into the ordered list of
//! adjustment opportunities the allocator consumes.

use rust_decimal::Decimal;
use shared::models::{AdjustmentDirection, AdjustmentSourceType, InvoiceItem};

/// A derived adjustment opportunity: one line item or one tax sub-item
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentCandidate {
    pub source_id: String,
    pub source_type: AdjustmentSourceType,
    /// Unsigned remaining adjustable magnitude
    pub capacity: Decimal,
    pub direction: AdjustmentDirection,
}

impl AdjustmentCandidate {
    fn from_amount(source_id: &str, source_type: AdjustmentSourceType, amount: Decimal) -> Self {
        let direction = if amount > Decimal::ZERO {
            AdjustmentDirection::Credit
        } else {
            AdjustmentDirection::Charge
        };
        Self {
            source_id: source_id.to_string(),
            source_type,
            capacity: amount.abs(),
            direction,
        }
    }
}

/// Build the ordered candidate list for one invoice
///
/// For each line item in input order: the item's own candidate first (kept
/// even at zero capacity; the allocator skips it without side effects),
/// then one candidate per non-zero tax sub-item, in input order.
pub fn build_candidates(items: &[InvoiceItem]) -> Vec<AdjustmentCandidate> {
    let mut candidates = Vec::new();

    for item in items {
        candidates.push(AdjustmentCandidate::from_amount(
            &item.id,
            AdjustmentSourceType::InvoiceDetail,
            item.available_to_adjust_amount,
        ));

        for tax in &item.taxation_items {
            if tax.available_to_adjust_amount == Decimal::ZERO {
                continue;
            }
            candidates.push(AdjustmentCandidate::from_amount(
                &tax.id,
                AdjustmentSourceType::Tax,
                tax.available_to_adjust_amount,
            ));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TaxationItem;

    fn item(id: &str, amount: i64, taxes: Vec<(&str, i64)>) -> InvoiceItem {
        InvoiceItem {
            id: id.to_string(),
            available_to_adjust_amount: Decimal::new(amount, 2),
            taxation_items: taxes
                .into_iter()
                .map(|(tax_id, tax_amount)| TaxationItem {
                    id: tax_id.to_string(),
                    available_to_adjust_amount: Decimal::new(tax_amount, 2),
                })
                .collect(),
        }
    }

    #[test]
    fn test_item_precedes_its_taxes_in_input_order() {
        let items = vec![
            item("item-1", 3000, vec![("tax-1", 1000), ("tax-2", 500)]),
            item("item-2", 2000, vec![("tax-3", 400)]),
        ];

        let candidates = build_candidates(&items);
        let ids: Vec<&str> = candidates.iter().map(|c| c.source_id.as_str()).collect();
        assert_eq!(ids, ["item-1", "tax-1", "tax-2", "item-2", "tax-3"]);
        assert_eq!(candidates[0].source_type, AdjustmentSourceType::InvoiceDetail);
        assert_eq!(candidates[1].source_type, AdjustmentSourceType::Tax);
    }

    #[test]
    fn test_direction_follows_sign_and_capacity_is_unsigned() {
        let items = vec![item("item-1", 3000, vec![]), item("item-2", -1500, vec![])];

        let candidates = build_candidates(&items);
        assert_eq!(candidates[0].direction, AdjustmentDirection::Credit);
        assert_eq!(candidates[0].capacity, Decimal::new(3000, 2));
        assert_eq!(candidates[1].direction, AdjustmentDirection::Charge);
        assert_eq!(candidates[1].capacity, Decimal::new(1500, 2));
    }

    #[test]
    fn test_zero_line_item_kept_zero_tax_dropped() {
        let items = vec![item("item-1", 0, vec![("tax-1", 0), ("tax-2", 200)])];

        let candidates = build_candidates(&items);
        let ids: Vec<&str> = candidates.iter().map(|c| c.source_id.as_str()).collect();
        assert_eq!(ids, ["item-1", "tax-2"]);
        assert_eq!(candidates[0].capacity, Decimal::ZERO);
    }
}
