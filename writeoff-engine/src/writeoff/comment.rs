//! Audit comments for write-off adjustments

use shared::models::CancelSource;

/// Fixed audit comment attached to every adjustment created for an invoice
///
/// The match is exhaustive on purpose: a new cancellation source must pick
/// its comment here before it can ship.
pub fn cancellation_comment(source: CancelSource) -> &'static str {
    match source {
        CancelSource::Mma => "Balance write-off due to MMA cancellation",
        CancelSource::Autocancel => "Balance write-off due to automatic cancellation",
        CancelSource::Salesforce => "Balance write-off due to Salesforce cancellation",
    }
}
