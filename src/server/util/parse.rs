use crate::server::error::AppError;

/// Parses an integer field value.
///
/// # Arguments
/// - `field` - Canonical field name used in the error message
/// - `value` - Trimmed raw value, either a form string or a JSON number rendered as text
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed value
/// - `Err(AppError::Validation)` - Value is not an integer
pub fn parse_i32(field: &str, value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("{} must be an integer", field)))
}

/// Parses a decimal field value.
///
/// Non-finite values such as `NaN` or `inf` are rejected even though Rust's float
/// parser accepts them.
///
/// # Arguments
/// - `field` - Canonical field name used in the error message
/// - `value` - Trimmed raw value
///
/// # Returns
/// - `Ok(f64)` - Successfully parsed finite value
/// - `Err(AppError::Validation)` - Value is not a finite number
pub fn parse_f64(field: &str, value: &str) -> Result<f64, AppError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(AppError::Validation(format!("{} must be a number", field))),
    }
}
