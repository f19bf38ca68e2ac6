use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ConversionPolicy;
use crate::domain::CurrencyCode;
use crate::rates::RateTable;

/// Runtime settings, gathered from command-line flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_currency: CurrencyCode,
    pub rates_file: Option<PathBuf>,
    pub policy: ConversionPolicy,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::default(),
            rates_file: None,
            policy: ConversionPolicy::Skip,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn new(
        base_currency: &str,
        rates_file: Option<PathBuf>,
        strict: bool,
        verbose: bool,
    ) -> Result<Self> {
        let base_currency = CurrencyCode::new(base_currency)
            .with_context(|| format!("Invalid base currency '{}'", base_currency))?;

        Ok(Self {
            base_currency,
            rates_file,
            policy: if strict {
                ConversionPolicy::Abort
            } else {
                ConversionPolicy::Skip
            },
            verbose,
        })
    }

    /// Load the configured rates file, or fall back to the built-in table.
    pub fn rate_table(&self) -> Result<RateTable> {
        match &self.rates_file {
            Some(path) => RateTable::from_path(path)
                .with_context(|| format!("Failed to load exchange rates from {}", path.display())),
            None => Ok(RateTable::builtin()),
        }
    }
}
