use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    format_date, validate_amount, validate_date, Category, CurrencyCode, PaymentMethod,
    ValidationError,
};

pub type ExpenseId = Uuid;

/// A validated expense, as it sits in the ledger.
///
/// The amount keeps the text that was typed in; `amount_value` re-reads it.
/// Records are never mutated after insertion, an edit removes the record
/// and submits a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub amount: String,
    pub currency: CurrencyCode,
    pub category: Category,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    pub fn new(
        amount: impl Into<String>,
        currency: CurrencyCode,
        category: Category,
        date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: amount.into(),
            currency,
            category,
            date,
            payment_method,
        }
    }

    /// Numeric value of the amount, or `None` when the stored text is not a number.
    pub fn amount_value(&self) -> Option<f64> {
        validate_amount(&self.amount).ok()
    }

    /// Same expense, ignoring identity.
    pub fn same_values(&self, other: &ExpenseRecord) -> bool {
        self.amount == other.amount
            && self.currency == other.currency
            && self.category == other.category
            && self.date == other.date
            && self.payment_method == other.payment_method
    }
}

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub date: String,
    pub payment_method: String,
}

impl Default for ExpenseDraft {
    /// The cleared form: zero amount in USD, dated today.
    fn default() -> Self {
        Self::cleared(Local::now().date_naive())
    }
}

impl ExpenseDraft {
    /// The cleared form, dated `today`.
    pub fn cleared(today: NaiveDate) -> Self {
        Self {
            amount: "0".to_string(),
            currency: CurrencyCode::default().to_string(),
            category: Category::default().to_string(),
            date: format_date(today),
            payment_method: PaymentMethod::default().to_string(),
        }
    }

    /// A form pre-filled with an existing record.
    pub fn from_record(record: &ExpenseRecord) -> Self {
        Self {
            amount: record.amount.clone(),
            currency: record.currency.to_string(),
            category: record.category.to_string(),
            date: format_date(record.date),
            payment_method: record.payment_method.to_string(),
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    /// Validate every field and build a fresh record.
    /// Fields are checked in form order; the first failure wins.
    pub fn validate(&self) -> Result<ExpenseRecord, ValidationError> {
        validate_amount(&self.amount)?;
        let currency = CurrencyCode::new(&self.currency)?;
        let category: Category = self.category.parse()?;
        let date = validate_date(self.date.trim())?;
        let payment_method: PaymentMethod = self.payment_method.parse()?;

        Ok(ExpenseRecord::new(
            self.amount.trim(),
            currency,
            category,
            date,
            payment_method,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft::cleared(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_cleared_form_defaults() {
        let form = draft();
        assert_eq!(form.amount, "0");
        assert_eq!(form.currency, "USD");
        assert_eq!(form.category, "Life Expenses");
        assert_eq!(form.date, "2024-01-15");
        assert_eq!(form.payment_method, "Cash");
    }

    #[test]
    fn test_validate_builds_record() {
        let record = draft()
            .with_amount(" 50 ")
            .with_currency("eur")
            .with_category("Grocery")
            .with_payment_method("credit card")
            .validate()
            .unwrap();

        assert_eq!(record.amount, "50");
        assert_eq!(record.amount_value(), Some(50.0));
        assert_eq!(record.currency.as_str(), "EUR");
        assert_eq!(record.category, Category::Grocery);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let err = draft()
            .with_amount("abc")
            .with_date("2024/01/01")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::NotANumber("abc".into()));

        let err = draft().with_date("2024-13-01").validate().unwrap_err();
        assert_eq!(err, ValidationError::BadFormat("2024-13-01".into()));

        let err = draft().with_category("Toys").validate().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory(_)));
    }

    #[test]
    fn test_draft_from_record_roundtrip() {
        let record = draft().with_amount("12.5").validate().unwrap();
        let again = ExpenseDraft::from_record(&record).validate().unwrap();

        assert!(record.same_values(&again));
        assert_ne!(record.id, again.id);
    }

    #[test]
    fn test_malformed_stored_amount_has_no_value() {
        let mut record = draft().validate().unwrap();
        record.amount = "5 dollars".to_string();
        assert_eq!(record.amount_value(), None);
    }
}
