//! Integer division with an explicit failure channel

use std::time::Instant;

use crate::errors::{PeaksError, Result};
use crate::log_op_error;

const OP_DIVIDE: &str = "divide";

/// Divide `x` by `y`, truncating toward zero
///
/// # Errors
///
/// Returns `PeaksError::DivisionByZero` when `y == 0`, and
/// `PeaksError::Overflow` for `i64::MIN / -1`.
///
/// # Example
///
/// ```
/// use peaks_core::division::divide;
/// use peaks_core::errors::PeaksError;
///
/// assert_eq!(divide(7, 2), Ok(3));
/// assert_eq!(divide(-7, 2), Ok(-3));
/// assert_eq!(divide(1, 0), Err(PeaksError::DivisionByZero));
/// ```
pub fn divide(x: i64, y: i64) -> Result<i64> {
    let started = Instant::now();
    let outcome = if y == 0 {
        Err(PeaksError::DivisionByZero)
    } else {
        x.checked_div(y).ok_or(PeaksError::Overflow)
    };

    if let Err(err) = &outcome {
        log_op_error!(
            OP_DIVIDE,
            err.clone(),
            duration_ms = started.elapsed().as_millis() as u64
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_truncated_quotients() {
        assert_eq!(divide(6, 3), Ok(2));
        assert_eq!(divide(7, 2), Ok(3));
        assert_eq!(divide(0, 5), Ok(0));
    }

    #[test]
    fn test_truncates_toward_zero_for_negatives() {
        assert_eq!(divide(-7, 2), Ok(-3));
        assert_eq!(divide(7, -2), Ok(-3));
        assert_eq!(divide(-7, -2), Ok(3));
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        assert_eq!(divide(1, 0), Err(PeaksError::DivisionByZero));
        assert_eq!(divide(0, 0), Err(PeaksError::DivisionByZero));
    }

    #[test]
    fn test_min_over_minus_one_overflows_instead_of_panicking() {
        assert_eq!(divide(i64::MIN, -1), Err(PeaksError::Overflow));
        assert_eq!(divide(i64::MIN, 1), Ok(i64::MIN));
    }
}
