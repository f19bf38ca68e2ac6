//! Currency conversion.
//!
//! Totals are computed through the [`RateProvider`] trait so the source of
//! rates can be swapped (static table, file, test double).

mod table;

use std::collections::BTreeSet;

use crate::domain::CurrencyCode;

pub use table::*;

/// Source of exchange rates.
pub trait RateProvider {
    /// Every currency this provider can convert from or to.
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode>;

    /// Convert `amount` of `from` into `to`.
    fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode)
        -> Result<f64, RateError>;
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        (**self).supported_currencies()
    }

    fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        (**self).convert(amount, from, to)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Box<P> {
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        (**self).supported_currencies()
    }

    fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        (**self).convert(amount, from, to)
    }
}

#[derive(Debug)]
pub enum RateError {
    UnsupportedCurrency(CurrencyCode),
    InvalidRate { currency: String, rate: f64 },
    Load(String),
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::UnsupportedCurrency(code) => {
                write!(f, "No exchange rate available for {}", code)
            }
            RateError::InvalidRate { currency, rate } => {
                write!(f, "Invalid exchange rate for {}: {}", currency, rate)
            }
            RateError::Load(reason) => write!(f, "Could not load exchange rates: {}", reason),
        }
    }
}

impl std::error::Error for RateError {}
