use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;
use super::category::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::Paypal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "Paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        PaymentMethod::ALL
            .into_iter()
            .find(|m| normalize(m.as_str()) == wanted)
            .ok_or_else(|| ValidationError::UnknownPaymentMethod(s.to_string()))
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("Cash".parse(), Ok(PaymentMethod::Cash));
        assert_eq!("credit card".parse(), Ok(PaymentMethod::CreditCard));
        assert_eq!("credit-card".parse(), Ok(PaymentMethod::CreditCard));
        assert_eq!("PayPal".parse(), Ok(PaymentMethod::Paypal));
    }

    #[test]
    fn test_payment_method_rejects_unknown() {
        assert!(matches!(
            "Bitcoin".parse::<PaymentMethod>(),
            Err(ValidationError::UnknownPaymentMethod(_))
        ));
    }
}
