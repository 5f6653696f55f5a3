//! Input validation and normalization helpers.

/// Length of a verification code
pub const CODE_LENGTH: usize = 6;

/// Normalize an email address for storage and lookup
///
/// Accounts are keyed by the trimmed, lower-cased form of the address, so
/// every lookup and every write must go through this function.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a string is a well-formed verification code (exactly 6 digits)
pub fn is_valid_code_format(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_is_valid_code_format() {
        assert!(is_valid_code_format("000000"));
        assert!(is_valid_code_format("123456"));
        assert!(!is_valid_code_format("12345"));
        assert!(!is_valid_code_format("1234567"));
        assert!(!is_valid_code_format("12345a"));
        assert!(!is_valid_code_format(""));
    }
}
