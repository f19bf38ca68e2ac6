use chrono::NaiveDate;

use super::ValidationError;

/// Canonical textual form of an expense date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date in strict `YYYY-MM-DD` form.
/// The shape is checked before chrono sees it, since chrono also accepts
/// unpadded months and days.
pub fn validate_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let bad_format = || ValidationError::BadFormat(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(bad_format());
    }
    let well_shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_shaped {
        return Err(bad_format());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| bad_format())
}

/// Render a date in its canonical form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_accepts_real_dates() {
        let date = validate_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        assert!(validate_date("2024-02-29").is_ok()); // leap year
        assert!(validate_date("1999-12-31").is_ok());
    }

    #[test]
    fn test_validate_date_rejects_impossible_dates() {
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-04-31").is_err());
        assert!(validate_date("2024-00-10").is_err());
    }

    #[test]
    fn test_validate_date_rejects_other_shapes() {
        for input in [
            "2024/01/01",
            "2024-1-5",
            "01-15-2024",
            "2024-01-15 ",
            "20240115",
            "",
            "yesterday",
        ] {
            assert_eq!(
                validate_date(input),
                Err(ValidationError::BadFormat(input.to_string()))
            );
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");
    }
}
