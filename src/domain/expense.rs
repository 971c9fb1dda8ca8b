use super::Amount;

/// A single expense entered by the user.
/// Records are immutable once added to the ledger; there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Always strictly positive
    pub amount: Amount,
    /// Free-text label, compared verbatim when grouping (case and whitespace kept)
    pub category: String,
    /// Optional free text; empty when the user skipped it
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(amount: Amount, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}
