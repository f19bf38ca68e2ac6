use super::ValidationError;

/// Parse the amount field of the expense form.
/// Accepts anything that reads as a finite decimal number, surrounding
/// whitespace ignored. Zero and negative values pass.
/// Example: "50" -> 50.0, " 12.5 " -> 12.5, "-3" -> -3.0
pub fn validate_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber(input.to_string())),
    }
}

/// Format an amount for display, rounded to two decimals.
/// Example: 70.0 -> "70.00", 12.345 -> "12.35", -0.001 -> "0.00"
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // Avoid rendering "-0.00" for tiny negative remainders
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}
