use peaks_core::testing::RecordingLogger;
use peaks_core::{Calculator, Operation};

/// Build a calculator with one Add queued per amount
#[allow(dead_code)]
pub fn calculator_with(amounts: &[i64]) -> Calculator<RecordingLogger> {
    let mut calc = Calculator::new(RecordingLogger::new());
    for &amount in amounts {
        calc.enqueue(Operation::Add(amount));
    }
    calc
}

/// The exact message sequence one run over `amounts` should emit,
/// starting from `base`
#[allow(dead_code)]
pub fn expected_protocol(amounts: &[i64], base: i64) -> Vec<String> {
    let total = amounts.iter().fold(base, |acc, &n| acc.wrapping_add(n));

    let mut lines = vec!["Start calc.".to_string()];
    lines.extend(amounts.iter().map(|n| format!("Add {}.", n)));
    lines.push(format!("Total is {}.", total));
    lines.push("Finish calc.".to_string());
    lines
}
