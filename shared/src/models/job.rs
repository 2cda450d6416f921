//! Job input and output records

use serde::{Deserialize, Serialize};

/// Where a cancellation originated
///
/// Selects the fixed audit comment attached to every adjustment for that
/// invoice. An unrecognized tag fails deserialization of the whole batch:
/// a missing deployment-time mapping, not bad per-invoice data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CancelSource {
    #[serde(rename = "MMA")]
    Mma,
    Autocancel,
    Salesforce,
}

/// One unit of job input: an invoice to write off
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WriteOffRequest {
    pub invoice_id: String,
    pub cancel_source: CancelSource,
}

/// A per-invoice failure captured during a run
///
/// Appended across the whole run and surfaced all-or-nothing at the end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub invoice_id: String,
    /// Human-readable aggregate of everything that went wrong
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_source_wire_tags() {
        let batch: Vec<WriteOffRequest> = serde_json::from_str(
            r#"[
                {"invoiceId":"INV-1","cancelSource":"MMA"},
                {"invoiceId":"INV-2","cancelSource":"Autocancel"},
                {"invoiceId":"INV-3","cancelSource":"Salesforce"}
            ]"#,
        )
        .unwrap();

        assert_eq!(batch[0].cancel_source, CancelSource::Mma);
        assert_eq!(batch[1].cancel_source, CancelSource::Autocancel);
        assert_eq!(batch[2].cancel_source, CancelSource::Salesforce);
    }

    #[test]
    fn test_unknown_cancel_source_is_rejected() {
        let result: Result<WriteOffRequest, _> =
            serde_json::from_str(r#"{"invoiceId":"INV-1","cancelSource":"Portal"}"#);
        assert!(result.is_err(), "unknown cancel source must fail the parse");
    }
}
