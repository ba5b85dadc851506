//! Local argument checks mirroring the advanced API's request schema.
//!
//! Invalid arguments fail with [`ClientError::InvalidRequest`] before any
//! network call is made.

use preeval_config::constants::{
    MAX_CONFIG_YEAR, MAX_USER_NAME_LEN, MIN_CONFIG_YEAR, MIN_USER_NAME_LEN,
};

use crate::error::{ClientError, Result};

/// Trim a user name and check its length (in characters).
pub fn check_user_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(MIN_USER_NAME_LEN..=MAX_USER_NAME_LEN).contains(&len) {
        return Err(ClientError::InvalidRequest(format!(
            "user name must be {MIN_USER_NAME_LEN}-{MAX_USER_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Check a `(day, month, year)` triple against the accepted ranges.
pub fn check_date(day: u8, month: u8, year: u16) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(ClientError::InvalidRequest(format!(
            "day must be between 1 and 31, got {day}"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(ClientError::InvalidRequest(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    if !(MIN_CONFIG_YEAR..=MAX_CONFIG_YEAR).contains(&year) {
        return Err(ClientError::InvalidRequest(format!(
            "year must be between {MIN_CONFIG_YEAR} and {MAX_CONFIG_YEAR}, got {year}"
        )));
    }
    Ok(())
}

/// Reject blank values for required text arguments.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_bounds() {
        assert!(check_user_name("a").is_err());
        assert_eq!(check_user_name("  ana  ").unwrap(), "ana");
        assert!(check_user_name(&"x".repeat(20)).is_ok());
        assert!(check_user_name(&"x".repeat(21)).is_err());
    }

    #[test]
    fn test_user_name_counts_characters_not_bytes() {
        assert!(check_user_name("ñañañañañañañañañaña").is_ok());
    }

    #[test]
    fn test_date_bounds() {
        assert!(check_date(28, 9, 2025).is_ok());
        assert!(check_date(0, 9, 2025).is_err());
        assert!(check_date(1, 13, 2025).is_err());
        assert!(check_date(1, 1, 2019).is_err());
        assert!(check_date(31, 12, 2030).is_ok());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("author", "  ").is_err());
        assert!(require_non_empty("author", "ana").is_ok());
    }
}
