use std::fmt;

/// Form fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    Currency,
    Category,
    Date,
    PaymentMethod,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Currency => "currency",
            Field::Category => "category",
            Field::Date => "date",
            Field::PaymentMethod => "payment method",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a form submission was rejected. Each variant carries the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotANumber(String),
    BadFormat(String),
    InvalidCurrency(String),
    UnknownCategory(String),
    UnknownPaymentMethod(String),
}

impl ValidationError {
    /// The field that needs fixing.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotANumber(_) => Field::Amount,
            ValidationError::BadFormat(_) => Field::Date,
            ValidationError::InvalidCurrency(_) => Field::Currency,
            ValidationError::UnknownCategory(_) => Field::Category,
            ValidationError::UnknownPaymentMethod(_) => Field::PaymentMethod,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber(input) => {
                write!(f, "'{}' is not a valid number for the expense amount", input)
            }
            ValidationError::BadFormat(input) => {
                write!(f, "'{}' is not a valid date, use the format YYYY-MM-DD", input)
            }
            ValidationError::InvalidCurrency(input) => {
                write!(f, "'{}' is not a currency code (expected e.g. USD)", input)
            }
            ValidationError::UnknownCategory(input) => write!(
                f,
                "Unknown category '{}'. Valid categories: {}",
                input,
                super::Category::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ValidationError::UnknownPaymentMethod(input) => write!(
                f,
                "Unknown payment method '{}'. Valid methods: {}",
                input,
                super::PaymentMethod::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::NotANumber("x".into()).field(), Field::Amount);
        assert_eq!(ValidationError::BadFormat("x".into()).field(), Field::Date);
        assert_eq!(
            ValidationError::UnknownPaymentMethod("x".into()).field(),
            Field::PaymentMethod
        );
    }

    #[test]
    fn test_unknown_category_lists_choices() {
        let msg = ValidationError::UnknownCategory("Toys".into()).to_string();
        assert!(msg.contains("Toys"));
        assert!(msg.contains("Life Expenses"));
        assert!(msg.contains("Charity"));
    }
}
