use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RateError, RateProvider};
use crate::domain::CurrencyCode;

/// EUR reference rates used when no rates file is given.
const BUILTIN_REFERENCE: &str = "EUR";
const BUILTIN_RATES: &[(&str, f64)] = &[
    ("USD", 1.0946),
    ("JPY", 160.20),
    ("GBP", 0.8599),
    ("CHF", 0.9334),
    ("CAD", 1.4711),
    ("AUD", 1.6418),
    ("CNY", 7.8574),
    ("SEK", 11.3055),
    ("NOK", 11.4270),
    ("DKK", 7.4588),
    ("PLN", 4.3768),
    ("CZK", 24.682),
    ("INR", 90.88),
    ("BRL", 5.3514),
    ("MXN", 18.6816),
];

/// Fixed table of rates, each expressed as units of a currency per one
/// unit of the reference currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    reference: CurrencyCode,
    rates: BTreeMap<CurrencyCode, f64>,
}

/// On-disk form: `{"reference": "EUR", "rates": {"USD": 1.08}}`
#[derive(Debug, Serialize, Deserialize)]
struct RateFile {
    reference: String,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Build a table. The reference currency is implicitly 1.0 and may be
    /// omitted from `rates`.
    pub fn new<I, S>(reference: &str, rates: I) -> Result<Self, RateError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let reference = CurrencyCode::new(reference)
            .map_err(|e| RateError::Load(e.to_string()))?;

        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.as_ref();
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateError::InvalidRate {
                    currency: code.to_string(),
                    rate,
                });
            }
            let code = CurrencyCode::new(code).map_err(|e| RateError::Load(e.to_string()))?;
            table.insert(code, rate);
        }
        table.insert(reference.clone(), 1.0);

        Ok(Self {
            reference,
            rates: table,
        })
    }

    /// The bundled snapshot of common currencies.
    pub fn builtin() -> Self {
        let mut rates: BTreeMap<CurrencyCode, f64> = BUILTIN_RATES
            .iter()
            .filter_map(|(code, rate)| CurrencyCode::new(code).ok().map(|c| (c, *rate)))
            .collect();
        let reference = CurrencyCode::new(BUILTIN_REFERENCE).unwrap_or_default();
        rates.insert(reference.clone(), 1.0);
        Self { reference, rates }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RateError> {
        let file: RateFile =
            serde_json::from_reader(reader).map_err(|e| RateError::Load(e.to_string()))?;
        Self::new(&file.reference, file.rates)
    }

    pub fn from_path(path: &Path) -> Result<Self, RateError> {
        let file = File::open(path)
            .map_err(|e| RateError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn reference(&self) -> &CurrencyCode {
        &self.reference
    }

    /// Units of `code` per one unit of the reference currency.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RateProvider for RateTable {
    fn supported_currencies(&self) -> BTreeSet<CurrencyCode> {
        self.rates.keys().cloned().collect()
    }

    fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| RateError::UnsupportedCurrency(from.clone()))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| RateError::UnsupportedCurrency(to.clone()))?;

        if from == to {
            return Ok(amount);
        }
        Ok(amount / from_rate * to_rate)
    }
}
