use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

use super::{Amount, ExpenseRecord, MAX_AMOUNT};

/// In-memory, insertion-ordered collection of every expense recorded in one run.
/// Aggregates are recomputed from the full sequence on every query.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Fails only when the running total would reach [`MAX_AMOUNT`],
    /// which keeps every total and category total representable.
    pub fn add(
        &mut self,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&ExpenseRecord, LedgerError> {
        self.check_capacity(amount)?;
        let index = self.records.len();
        self.records.push(ExpenseRecord::new(amount, category, description));
        Ok(&self.records[index])
    }

    /// Append a record from a raw decimal, rejecting amounts `<= 0`.
    /// The ledger is left untouched on failure.
    pub fn try_add(
        &mut self,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&ExpenseRecord, LedgerError> {
        let amount = Amount::new(amount).map_err(|_| LedgerError::InvalidAmount(amount))?;
        self.add(amount, category, description)
    }

    /// Check that `amount` can be added without the total reaching [`MAX_AMOUNT`].
    pub fn check_capacity(&self, amount: Amount) -> Result<(), LedgerError> {
        match self.total().checked_add(amount.value()) {
            Some(total) if total < MAX_AMOUNT => Ok(()),
            _ => Err(LedgerError::TotalTooLarge),
        }
    }

    pub fn list(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all amounts; zero for an empty ledger.
    /// Cannot overflow: `add` keeps the total below [`MAX_AMOUNT`].
    pub fn total(&self) -> Decimal {
        self.records.iter().map(|record| record.amount.value()).sum()
    }

    /// Sum of amounts per exact category string, in order of first appearance.
    pub fn totals_by_category(&self) -> IndexMap<String, Decimal> {
        let mut totals: IndexMap<String, Decimal> = IndexMap::new();

        for record in &self.records {
            *totals
                .entry(record.category.clone())
                .or_insert(Decimal::ZERO) += record.amount.value();
        }

        totals
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be greater than 0 and below 10^26)")]
    InvalidAmount(Decimal),

    #[error(
        "Amount would push the total spent past the largest supported value. Please try again."
    )]
    TotalTooLarge,
}
