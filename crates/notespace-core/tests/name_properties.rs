//! Property-based tests for folder name validation
//!
//! Uses proptest to verify the validation rules around the 50-character
//! boundary and trimming behavior.

use notespace_core::rename::{validate_name, MAX_NAME_LEN, NAME_REQUIRED, NAME_TOO_LONG};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Names that are valid after trimming (1..=50 non-space characters)
fn valid_core_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{1,50}").expect("valid regex")
}

/// Surrounding whitespace of arbitrary (bounded) width
fn padding_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,8}").expect("valid regex")
}

/// All-whitespace input
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,20}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Valid cores survive any surrounding whitespace and come back trimmed
    #[test]
    fn padding_is_stripped(core in valid_core_strategy(),
                           left in padding_strategy(),
                           right in padding_strategy()) {
        let raw = format!("{left}{core}{right}");
        prop_assert_eq!(validate_name(&raw), Ok(core));
    }

    /// Blank input always yields the "required" error
    #[test]
    fn blank_is_required_error(raw in blank_strategy()) {
        prop_assert_eq!(validate_name(&raw), Err(NAME_REQUIRED.to_string()));
    }

    /// Trimmed length above the limit always yields the "too long" error
    #[test]
    fn over_limit_is_too_long_error(extra in 1usize..40) {
        let raw = "x".repeat(MAX_NAME_LEN + extra);
        prop_assert_eq!(validate_name(&raw), Err(NAME_TOO_LONG.to_string()));
    }

    /// Validation is idempotent: a trimmed valid name validates to itself
    #[test]
    fn validation_is_idempotent(core in valid_core_strategy()) {
        let once = validate_name(&core).unwrap();
        prop_assert_eq!(validate_name(&once), Ok(core));
    }
}

#[test]
fn exact_limit_passes() {
    let name = "x".repeat(MAX_NAME_LEN);
    assert_eq!(validate_name(&name), Ok(name));
}

#[test]
fn one_past_limit_fails() {
    assert_eq!(
        validate_name(&"x".repeat(MAX_NAME_LEN + 1)),
        Err(NAME_TOO_LONG.to_string())
    );
}
