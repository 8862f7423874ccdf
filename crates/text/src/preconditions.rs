//! Argument checks shared by every formatting operation.

use crate::error::{Result, TextError};

/// Unwrap a required argument, failing with [`TextError::MissingValue`]
/// naming `parameter` when it is absent.
///
/// # Examples
///
/// ```
/// use text::preconditions::require;
///
/// assert_eq!(require(Some(3), "count"), Ok(3));
/// assert_eq!(
///     require(None::<u8>, "count").unwrap_err().to_string(),
///     "[count] is required"
/// );
/// ```
pub fn require<T>(value: Option<T>, parameter: &str) -> Result<T> {
    value.ok_or_else(|| TextError::MissingValue {
        parameter: parameter.to_string(),
    })
}

/// Fail with [`TextError::InvalidValue`] unless `is_valid` holds.
pub fn check_argument(is_valid: bool, parameter: &str, reason: &str) -> Result<()> {
    if is_valid {
        Ok(())
    } else {
        Err(TextError::InvalidValue {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        })
    }
}
