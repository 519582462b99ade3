//! Numeric-string check

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// `true` for any Unicode decimal digit (general category Nd), so fullwidth
/// `１` and Arabic-Indic `١` qualify alongside ASCII `1`
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// `true` if every char is a decimal digit; the empty string qualifies
pub fn is_only_numeric(s: &str) -> bool {
    s.chars().all(is_decimal_digit)
}
