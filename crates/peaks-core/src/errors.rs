use thiserror::Error;

/// Result type alias using PeaksError
pub type Result<T> = std::result::Result<T, PeaksError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions and CLI exit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Arithmetic
    DivisionByZero,
    Overflow,

    // Validation
    InvalidInput,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DivisionByZero => "ERR_DIVISION_BY_ZERO",
            ExErrorKind::Overflow => "ERR_OVERFLOW",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional operation context for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the arithmetic and validation helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeaksError {
    /// Divisor was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in an i64 (only `i64::MIN / -1` today)
    #[error("Arithmetic overflow")]
    Overflow,

    /// Caller supplied something that cannot be interpreted
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<PeaksError> for ExError {
    fn from(err: PeaksError) -> Self {
        match err {
            PeaksError::DivisionByZero => ExError::new(ExErrorKind::DivisionByZero)
                .with_op("divide")
                .with_message("Division by zero"),

            PeaksError::Overflow => ExError::new(ExErrorKind::Overflow)
                .with_op("divide")
                .with_message("Arithmetic overflow"),

            PeaksError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::DivisionByZero, "ERR_DIVISION_BY_ZERO"),
            (ExErrorKind::Overflow, "ERR_OVERFLOW"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::DivisionByZero)
            .with_op("divide")
            .with_message("Division by zero");
        assert_eq!(
            err.to_string(),
            "[ERR_DIVISION_BY_ZERO] in operation 'divide': Division by zero"
        );
    }

    #[test]
    fn test_display_without_context_is_just_the_code() {
        let err = ExError::new(ExErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "[ERR_INVALID_INPUT]");
    }

    #[test]
    fn test_every_kind_has_a_domain_producer() {
        let produced: Vec<ExErrorKind> = [
            PeaksError::DivisionByZero,
            PeaksError::Overflow,
            PeaksError::InvalidInput {
                reason: String::new(),
            },
        ]
        .into_iter()
        .map(|e| ExError::from(e).kind())
        .collect();
        assert_eq!(
            produced,
            vec![
                ExErrorKind::DivisionByZero,
                ExErrorKind::Overflow,
                ExErrorKind::InvalidInput,
            ]
        );
    }

    #[test]
    fn test_invalid_input_keeps_reason() {
        let ex: ExError = PeaksError::InvalidInput {
            reason: "not a number: x".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
        assert_eq!(ex.message(), "not a number: x");
        assert!(ex.op().is_none());
    }
}
