mod common;

use anyhow::Result;
use common::{draft, test_service, usd};
use impensa::application::AppError;
use impensa::domain::{validate_amount, validate_date, Category, PaymentMethod, ValidationError};

#[test]
fn test_two_usd_expenses_total_seventy() -> Result<()> {
    let mut service = test_service();

    service.submit(&draft("50", "USD", "Grocery", "2024-01-15", "Cash"))?;
    service.submit(&draft("20", "USD", "Grocery", "2024-01-15", "Credit Card"))?;

    assert_eq!(service.records().len(), 2);
    assert_eq!(service.total()?.display(), "70.00");
    assert_eq!(service.records()[1].payment_method, PaymentMethod::CreditCard);

    Ok(())
}

#[test]
fn test_non_numeric_amount_is_rejected() -> Result<()> {
    let mut service = test_service();

    let err = service.submit(&usd("abc")).unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::NotANumber(ref s)) if s == "abc"
    ));
    assert_eq!(service.records().len(), 0);
    assert_eq!(service.total()?.display(), "0.00");

    Ok(())
}

#[test]
fn test_bad_date_is_rejected() -> Result<()> {
    let mut service = test_service();

    for date in ["2024-13-01", "2024/01/01"] {
        let err = service
            .submit(&draft("10", "USD", "Gas", date, "Cash"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::BadFormat(_))));
    }
    assert!(service.records().is_empty());

    Ok(())
}

#[test]
fn test_add_then_delete_returns_to_zero() -> Result<()> {
    let mut service = test_service();

    service.submit(&usd("42.10"))?;
    assert_eq!(service.total()?.display(), "42.10");

    service.delete(0)?;

    assert_eq!(service.records().len(), 0);
    assert_eq!(service.total()?.display(), "0.00");

    Ok(())
}

#[test]
fn test_append_lands_at_the_end() -> Result<()> {
    let mut service = test_service();
    service.submit(&usd("1"))?;
    service.submit(&usd("2"))?;

    let before = service.records().len();
    let id = service.submit(&usd("3"))?.id;

    assert_eq!(service.records().len(), before + 1);
    assert_eq!(service.records().last().map(|r| r.id), Some(id));

    Ok(())
}

#[test]
fn test_delete_removes_exactly_that_record() -> Result<()> {
    let mut service = test_service();
    for amount in ["1", "2", "3", "4"] {
        service.submit(&usd(amount))?;
    }
    let ids: Vec<_> = service.records().iter().map(|r| r.id).collect();

    let removed = service.delete(2)?;

    assert_eq!(removed.id, ids[2]);
    let remaining: Vec<_> = service.records().iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[1], ids[3]]);

    Ok(())
}

#[test]
fn test_delete_unknown_row_is_not_found() -> Result<()> {
    let mut service = test_service();
    service.submit(&usd("1"))?;

    let err = service.delete(3).unwrap_err();

    assert!(matches!(err, AppError::NotFound { index: 3, len: 1 }));
    assert_eq!(service.records().len(), 1);

    Ok(())
}

#[test]
fn test_duplicates_are_kept() -> Result<()> {
    let mut service = test_service();
    let form = usd("9.99");

    service.submit(&form)?;
    service.submit(&form)?;

    let records = service.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].same_values(&records[1]));
    assert_ne!(records[0].id, records[1].id);
    assert_eq!(service.total()?.display(), "19.98");

    Ok(())
}

#[test]
fn test_usd_total_matches_arithmetic_sum() -> Result<()> {
    let mut service = test_service();
    let amounts = ["12.34", "0.66", "100", "7.5", "3.333"];
    for amount in amounts {
        service.submit(&usd(amount))?;
    }

    let expected: f64 = amounts.iter().map(|a| a.parse::<f64>().unwrap()).sum();
    let total = service.total()?;

    assert_eq!(total.display(), format!("{:.2}", expected));
    assert_eq!(total.display(), "123.83");

    Ok(())
}

#[test]
fn test_zero_and_negative_amounts_are_accepted() -> Result<()> {
    let mut service = test_service();

    service.submit(&usd("0"))?;
    service.submit(&usd("-5"))?;
    service.submit(&usd("15"))?;

    assert_eq!(service.records().len(), 3);
    assert_eq!(service.total()?.display(), "10.00");

    Ok(())
}

#[test]
fn test_every_category_and_method_is_accepted() -> Result<()> {
    let mut service = test_service();

    for category in Category::ALL {
        for method in PaymentMethod::ALL {
            service.submit(&draft(
                "1",
                "USD",
                category.as_str(),
                "2024-02-29",
                method.as_str(),
            ))?;
        }
    }

    assert_eq!(service.records().len(), 24);
    assert_eq!(service.total()?.display(), "24.00");

    Ok(())
}

#[test]
fn test_validators_on_their_own() {
    assert_eq!(validate_amount("50"), Ok(50.0));
    assert!(validate_amount("12.3.4").is_err());
    assert!(validate_amount("").is_err());

    assert!(validate_date("2024-01-15").is_ok());
    assert!(validate_date("2024-13-01").is_err());
    assert!(validate_date("2024/01/01").is_err());
}
