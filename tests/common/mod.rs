// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeSet;

use impensa::application::ExpenseService;
use impensa::domain::{CurrencyCode, ExpenseDraft};
use impensa::rates::{RateError, RateProvider, RateTable};

/// Helper to create a service totalling in USD, with EUR at 2 USD and GBP at 4 USD
pub fn test_service() -> ExpenseService<RateTable> {
    ExpenseService::new(test_rates())
}

pub fn test_rates() -> RateTable {
    RateTable::new("USD", [("EUR", 0.5), ("GBP", 0.25)]).unwrap()
}

/// Helper to build a filled-in form
pub fn draft(amount: &str, currency: &str, category: &str, date: &str, method: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: amount.to_string(),
        currency: currency.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        payment_method: method.to_string(),
    }
}

/// A USD grocery expense paid in cash on 2024-01-15
pub fn usd(amount: &str) -> ExpenseDraft {
    draft(amount, "USD", "Grocery", "2024-01-15", "Cash")
}

pub fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s).unwrap()
}

/// Rate provider that records how often it is asked to convert
pub struct CountingRates {
    pub inner: RateTable,
    pub calls: Cell<usize>,
}

impl CountingRates {
    pub fn new() -> Self {
        Self {
            inner: test_rates(),
            calls: Cell::new(0),
        }
    }
}

impl RateProvider for CountingRates {
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        self.inner.supported_currencies()
    }

    fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.convert(amount, from, to)
    }
}

/// Rate provider whose lookups always fail, like an unreachable rate service
pub struct UnavailableRates;

impl RateProvider for UnavailableRates {
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        BTreeSet::new()
    }

    fn convert(
        &self,
        _amount: f64,
        _from: &CurrencyCode,
        _to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        Err(RateError::Load("rate service unreachable".to_string()))
    }
}
