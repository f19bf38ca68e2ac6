use std::collections::BTreeSet;

use crate::domain::{CurrencyCode, ExpenseDraft, ExpenseRecord, Ledger};
use crate::rates::RateProvider;

use super::{total, AppError, ConversionPolicy, Total};

/// Application service providing high-level operations for the expense log.
/// This is the primary interface for any client (CLI session, tests, etc.).
pub struct ExpenseService<P> {
    ledger: Ledger,
    rates: P,
    base_currency: CurrencyCode,
    policy: ConversionPolicy,
    edit: EditState,
}

/// Whether a record has been pulled out of the ledger for editing.
#[derive(Debug, Clone, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        original: ExpenseRecord,
        index: usize,
    },
}

impl<P: RateProvider> ExpenseService<P> {
    /// Create a service with an empty ledger totalling in USD.
    pub fn new(rates: P) -> Self {
        Self {
            ledger: Ledger::new(),
            rates,
            base_currency: CurrencyCode::default(),
            policy: ConversionPolicy::default(),
            edit: EditState::Idle,
        }
    }

    pub fn with_base_currency(mut self, base_currency: CurrencyCode) -> Self {
        self.base_currency = base_currency;
        self
    }

    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn base_currency(&self) -> &CurrencyCode {
        &self.base_currency
    }

    pub fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        self.rates.supported_currencies()
    }

    // ========================
    // Ledger operations
    // ========================

    /// Validate a form and append the resulting record.
    /// If an edit is pending, this completes it.
    pub fn submit(&mut self, draft: &ExpenseDraft) -> Result<&ExpenseRecord, AppError> {
        let record = draft.validate()?;

        if !self.rates.supported_currencies().contains(&record.currency) {
            tracing::warn!(currency = %record.currency, "currency has no known exchange rate");
        }

        if let EditState::Editing { original, .. } = std::mem::take(&mut self.edit) {
            tracing::info!(replaced = %original.id, id = %record.id, "edit saved");
        } else {
            tracing::info!(id = %record.id, amount = %record.amount, currency = %record.currency, "expense added");
        }

        Ok(self.ledger.append(record))
    }

    /// Remove the record at `index`.
    pub fn delete(&mut self, index: usize) -> Result<ExpenseRecord, AppError> {
        let removed = self.ledger.remove_at(index)?;
        tracing::info!(index, id = %removed.id, "expense deleted");
        Ok(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.all()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Recompute the total in the base currency.
    pub fn total(&self) -> Result<Total, AppError> {
        total(&self.ledger, &self.base_currency, &self.rates, self.policy)
    }

    // ========================
    // Edit flow
    // ========================

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing { .. })
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Take the record at `index` out of the ledger and return it as a
    /// pre-filled form. The record stays out until the edit is saved or
    /// cancelled.
    pub fn begin_edit(&mut self, index: usize) -> Result<ExpenseDraft, AppError> {
        if self.is_editing() {
            return Err(AppError::EditInProgress);
        }

        let original = self.ledger.remove_at(index)?;
        let draft = ExpenseDraft::from_record(&original);
        tracing::info!(index, id = %original.id, "editing expense");
        self.edit = EditState::Editing { original, index };
        Ok(draft)
    }

    /// Save the edited form as a new record at the end of the ledger.
    /// On validation failure the edit stays pending.
    pub fn commit_edit(&mut self, draft: &ExpenseDraft) -> Result<&ExpenseRecord, AppError> {
        if !self.is_editing() {
            return Err(AppError::NoEditInProgress);
        }
        self.submit(draft)
    }

    /// Abandon the edit and put the original record back where it was.
    pub fn cancel_edit(&mut self) -> Result<&ExpenseRecord, AppError> {
        match std::mem::take(&mut self.edit) {
            EditState::Idle => Err(AppError::NoEditInProgress),
            EditState::Editing { original, index } => {
                let id = original.id;
                let position = self.ledger.insert_at(index, original);
                tracing::info!(index = position, %id, "edit cancelled, expense restored");
                Ok(&self.ledger.all()[position])
            }
        }
    }
}
