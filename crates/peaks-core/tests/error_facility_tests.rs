use peaks_core::errors::{ExError, ExErrorKind, PeaksError};

#[test]
fn test_division_by_zero_verifiable_by_kind() {
    let ex_err: ExError = PeaksError::DivisionByZero.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DivisionByZero);
    assert_eq!(ex_err.code(), "ERR_DIVISION_BY_ZERO");
    assert_eq!(ex_err.op(), Some("divide"));
}

#[test]
fn test_overflow_distinct_from_division_by_zero() {
    let ex_err: ExError = PeaksError::Overflow.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Overflow);
    assert_ne!(ex_err.kind(), ExErrorKind::DivisionByZero);
}

#[test]
fn test_domain_error_messages() {
    assert_eq!(PeaksError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        PeaksError::InvalidInput {
            reason: "unknown operation: mul:2".to_string()
        }
        .to_string(),
        "Invalid input: unknown operation: mul:2"
    );
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::DivisionByZero,
        ExErrorKind::Overflow,
        ExErrorKind::InvalidInput,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a.code(), b.code());
        }
    }
}
