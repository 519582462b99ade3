//! Redacting wrapper for secrets
//!
//! Passwords handed to the validator travel inside `Sensitive<T>` so that a
//! stray `{:?}` in a log line or a panic message never prints them.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper whose `Debug` and `Display` output is always redacted
///
/// # Example
///
/// ```
/// use peaks_core_types::Sensitive;
///
/// let password = Sensitive::new(String::from("abcdef12"));
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(password.expose(), "abcdef12");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a secret value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the secret
    ///
    /// Call sites that need the raw value (the validator, mostly) should
    /// keep the borrow as short as possible.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the secret
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_never_rendered_by_debug() {
        let password = Sensitive::new("abcdef12");
        let rendered = format!("{:?}", password);
        assert_eq!(rendered, REDACTED);
        assert!(!rendered.contains("abcdef12"));
    }

    #[test]
    fn test_password_never_rendered_by_display() {
        let password = Sensitive::new(String::from("abcdefg123"));
        assert_eq!(password.to_string(), REDACTED);
    }

    #[test]
    fn test_expose_and_into_inner_return_the_secret() {
        let password: Sensitive<String> = String::from("abcde12").into();
        assert_eq!(password.expose(), "abcde12");
        assert_eq!(password.into_inner(), "abcde12");
    }

    #[test]
    fn test_redaction_inside_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct LoginForm {
            user: String,
            password: Sensitive<String>,
        }

        let form = LoginForm {
            user: "koala".to_string(),
            password: Sensitive::new("abcdef12".to_string()),
        };

        let rendered = format!("{:?}", form);
        assert!(rendered.contains("koala"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("abcdef12"));
    }
}
