use serde::Serialize;

use crate::domain::{format_amount, CurrencyCode, ExpenseId, Ledger};
use crate::rates::RateProvider;

use super::AppError;

/// What to do with a record whose currency cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionPolicy {
    /// Leave the record out and report it in [`Total::skipped`].
    #[default]
    Skip,
    /// Fail the whole total.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    MalformedAmount(String),
    ConversionUnavailable(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MalformedAmount(amount) => write!(f, "amount '{}' is not a number", amount),
            SkipReason::ConversionUnavailable(reason) => write!(f, "{}", reason),
        }
    }
}

/// A record that did not contribute to a total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub id: ExpenseId,
    pub reason: SkipReason,
}

/// Sum of the ledger in the base currency. `amount` is unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Total {
    pub base: CurrencyCode,
    pub amount: f64,
    pub counted: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl Total {
    /// The amount rounded to two decimals, e.g. "70.00".
    pub fn display(&self) -> String {
        format_amount(self.amount)
    }
}

/// Sum every record in `base`, converting foreign currencies through
/// `provider`. Rates are looked up afresh for each record on every call.
pub fn total<P: RateProvider + ?Sized>(
    ledger: &Ledger,
    base: &CurrencyCode,
    provider: &P,
    policy: ConversionPolicy,
) -> Result<Total, AppError> {
    let mut sum = 0.0;
    let mut counted = 0;
    let mut skipped = Vec::new();

    for (index, record) in ledger.all().iter().enumerate() {
        let Some(amount) = record.amount_value() else {
            tracing::warn!(index, id = %record.id, amount = %record.amount, "skipping record with malformed amount");
            skipped.push(SkippedRecord {
                index,
                id: record.id,
                reason: SkipReason::MalformedAmount(record.amount.clone()),
            });
            continue;
        };

        if &record.currency == base {
            sum += amount;
            counted += 1;
            continue;
        }

        match provider.convert(amount, &record.currency, base) {
            Ok(converted) => {
                tracing::debug!(
                    index,
                    from = %record.currency,
                    to = %base,
                    amount,
                    converted,
                    "converted expense"
                );
                sum += converted;
                counted += 1;
            }
            Err(err) => match policy {
                ConversionPolicy::Abort => return Err(AppError::ConversionUnavailable(err)),
                ConversionPolicy::Skip => {
                    tracing::warn!(index, id = %record.id, error = %err, "skipping unconvertible record");
                    skipped.push(SkippedRecord {
                        index,
                        id: record.id,
                        reason: SkipReason::ConversionUnavailable(err.to_string()),
                    });
                }
            },
        }
    }

    Ok(Total {
        base: base.clone(),
        amount: sum,
        counted,
        skipped,
    })
}
