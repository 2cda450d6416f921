/// Current UTC date (ledger adjustment dates are date-only)
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
