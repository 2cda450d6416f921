//! Result Classifier
//!
//! Separates benign ledger rejections from real per-item failures.

use shared::models::{ActionError, ActionResult, FailureRecord};

/// Rejection messages that mean "this item simply didn't need adjusting".
/// The ledger re-validates every adjustment against the balance it
/// currently observes, so these arise when an item was already settled
/// between planning and submission.
const IGNORABLE_ERRORS: [&str; 3] = [
    "Adjustment amount cannot be negative or zero",
    "The adjustment amount is out of range",
    "does not match the sign of the invoice balance",
];

fn is_ignorable(error: &ActionError) -> bool {
    IGNORABLE_ERRORS
        .iter()
        .any(|needle| error.message.contains(needle))
}

/// Fold one submission's per-item results into per-invoice failures
///
/// An unsuccessful item whose every error is ignorable is dropped silently.
/// Any other unsuccessful item becomes one failure record carrying all of
/// that item's errors, joined. Failures are appended as encountered, never
/// deduplicated or merged.
pub fn classify_results(invoice_id: &str, results: &[ActionResult]) -> Vec<FailureRecord> {
    let mut failures = Vec::new();

    for result in results {
        if result.success {
            continue;
        }

        let errors = result.errors.as_deref().unwrap_or(&[]);
        if !errors.is_empty() && errors.iter().all(is_ignorable) {
            tracing::debug!(
                invoice_id = %invoice_id,
                "Dropping benign adjustment rejection"
            );
            continue;
        }

        let error = if errors.is_empty() {
            "adjustment rejected without error detail".to_string()
        } else {
            errors
                .iter()
                .map(|e| format!("{}: {}", e.code, e.message))
                .collect::<Vec<_>>()
                .join("; ")
        };

        tracing::warn!(invoice_id = %invoice_id, error = %error, "Adjustment failed");
        failures.push(FailureRecord {
            invoice_id: invoice_id.to_string(),
            error,
        });
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(errors: Vec<(&str, &str)>) -> ActionResult {
        ActionResult {
            id: None,
            success: false,
            errors: Some(
                errors
                    .into_iter()
                    .map(|(code, message)| ActionError {
                        code: code.to_string(),
                        message: message.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    fn succeeded() -> ActionResult {
        ActionResult {
            id: Some("adj-1".to_string()),
            success: true,
            errors: None,
        }
    }

    #[test]
    fn test_benign_rejection_dropped_real_failure_recorded() {
        let results = vec![
            failed(vec![(
                "INVALID_VALUE",
                "Adjustment amount cannot be negative or zero",
            )]),
            failed(vec![("INVALID_VALUE", "Invoice not found")]),
        ];

        let failures = classify_results("INV-1", &results);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].invoice_id, "INV-1");
        assert_eq!(failures[0].error, "INVALID_VALUE: Invoice not found");
    }

    #[test]
    fn test_item_with_any_real_error_fails_whole_item() {
        // One ignorable and one real error on the same item: the item fails
        // and the record carries both messages
        let results = vec![failed(vec![
            (
                "INVALID_VALUE",
                "The adjustment amount is out of range",
            ),
            ("TRANSACTION_FAILED", "Lock competition"),
        ])];

        let failures = classify_results("INV-2", &results);
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].error,
            "INVALID_VALUE: The adjustment amount is out of range; TRANSACTION_FAILED: Lock competition"
        );
    }

    #[test]
    fn test_all_ignorable_item_produces_no_failure() {
        let results = vec![failed(vec![
            (
                "INVALID_VALUE",
                "Adjustment amount cannot be negative or zero",
            ),
            (
                "INVALID_VALUE",
                "The sign of the amount does not match the sign of the invoice balance",
            ),
        ])];

        assert!(classify_results("INV-1", &results).is_empty());
    }

    #[test]
    fn test_unsuccessful_item_without_detail_is_a_failure() {
        let results = vec![ActionResult {
            id: None,
            success: false,
            errors: None,
        }];

        let failures = classify_results("INV-1", &results);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].error, "adjustment rejected without error detail");
    }

    #[test]
    fn test_successful_items_are_not_failures() {
        let results = vec![succeeded(), succeeded()];
        assert!(classify_results("INV-1", &results).is_empty());
    }

    #[test]
    fn test_failures_are_appended_not_merged() {
        let results = vec![
            failed(vec![("A", "first problem")]),
            failed(vec![("B", "second problem")]),
        ];

        let failures = classify_results("INV-1", &results);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].error, "A: first problem");
        assert_eq!(failures[1].error, "B: second problem");
    }
}
