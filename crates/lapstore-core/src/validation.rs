//! # Validation Module
//!
//! Input validation for records before they reach the database.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Layer 1: THIS MODULE - field rules (empty, length, sign)    │
//! │  Layer 2: SQLite - NOT NULL, UNIQUE, FOREIGN KEY constraints │
//! │                                                              │
//! │  Defense in depth: the store still enforces integrity even   │
//! │  when a caller skips validation.                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Account;
use crate::{MAX_CODE_LEN, MIN_PASSWORD_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a business code (any entity key).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_CODE_LEN`] characters
///
/// ## Example
/// ```rust
/// use lapstore_core::validation::validate_code;
///
/// assert!(validate_code("code", "SP001").is_ok());
/// assert!(validate_code("code", "   ").is_err());
/// ```
pub fn validate_code(field: &str, code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_CODE_LEN,
        });
    }

    Ok(())
}

/// Validates a login username: non-empty, at most [`MAX_CODE_LEN`] characters.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_code("username", username)
}

/// Validates a candidate password before hashing.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity (order or receipt line).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a price or cost in cents.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an account before insert or update.
///
/// Checks the key, the linked codes and the credential fields. The password
/// check applies to plaintext input; an already-hashed value is longer than
/// any minimum, so it passes unchanged.
pub fn validate_account(account: &Account) -> ValidationResult<()> {
    validate_code("account code", &account.code)?;
    validate_code("employee code", &account.employee_code)?;
    validate_code("role code", &account.role_code)?;
    validate_username(&account.username)?;
    validate_password(&account.password)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account {
            code: "TK002".to_string(),
            employee_code: "NV002".to_string(),
            username: "test".to_string(),
            password: "password1234".to_string(),
            role_code: "MANAGER".to_string(),
        }
    }

    #[test]
    fn code_must_be_non_empty() {
        assert!(validate_code("code", "SP001").is_ok());
        assert!(validate_code("code", "").is_err());
        assert!(validate_code("code", "   ").is_err());
    }

    #[test]
    fn code_length_is_bounded() {
        let long = "X".repeat(MAX_CODE_LEN + 1);
        assert!(validate_code("code", &long).is_err());
        assert!(validate_code("code", &"X".repeat(MAX_CODE_LEN)).is_ok());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("password1234").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn quantity_and_price_rules() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn account_validation() {
        assert!(validate_account(&sample_account()).is_ok());

        let mut missing_user = sample_account();
        missing_user.username = " ".to_string();
        assert!(validate_account(&missing_user).is_err());

        let mut blank_key = sample_account();
        blank_key.code = String::new();
        assert!(validate_account(&blank_key).is_err());
    }
}
