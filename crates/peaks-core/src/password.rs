//! Password strength rule

use peaks_core_types::Sensitive;
use unicode_segmentation::UnicodeSegmentation;

use crate::numeric::is_decimal_digit;

/// Minimum length and digit count a password must reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub min_digits: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_digits: 2,
        }
    }
}

impl PasswordPolicy {
    /// Length is counted in grapheme clusters; any Unicode decimal digit
    /// counts toward the digit minimum
    pub fn validate(&self, password: &str) -> bool {
        let length = password.graphemes(true).count();
        let digits = password.chars().filter(|&c| is_decimal_digit(c)).count();
        let valid = length >= self.min_length && digits >= self.min_digits;
        tracing::debug!(op = "validate_password", length, digits, valid);
        valid
    }

    pub fn validate_sensitive(&self, password: &Sensitive<String>) -> bool {
        self.validate(password.expose())
    }
}

/// Validate against the default policy: at least 8 chars and 2 digits
pub fn validate(password: &str) -> bool {
    PasswordPolicy::default().validate(password)
}
