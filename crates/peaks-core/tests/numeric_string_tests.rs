use peaks_core::numeric::is_only_numeric;
use peaks_core::testing::assert_only_numeric;

#[test]
fn test_is_only_numeric_string() {
    assert_only_numeric("0123456789");
    assert_only_numeric("7");
}

#[test]
#[should_panic(expected = "is not only numeric")]
fn test_leading_letter_is_rejected() {
    assert_only_numeric("a0123456789");
}

#[test]
fn test_mixed_strings() {
    assert!(!is_only_numeric("0123a"));
    assert!(is_only_numeric("１２３"));
    assert!(is_only_numeric("١٢٣"));
    assert!(is_only_numeric(""));
}
