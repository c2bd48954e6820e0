mod common;

use calculator::Calculator;
use common::with_captured_logs;

#[test]
fn successful_operations_are_logged_at_info() {
    let logs = with_captured_logs(|| {
        let calc = Calculator::new();
        calc.add(5, 3);
        calc.subtract(10, 4);
        calc.multiply(6, 7);
        calc.divide(15, 3).unwrap();
        calc.power(2, 8);
        calc.square_root(25).unwrap();
    });

    let lines = logs.lines();
    assert_eq!(lines.len(), 6);

    let expected = [
        "Addition: 5 + 3 = 8",
        "Subtraction: 10 - 4 = 6",
        "Multiplication: 6 * 7 = 42",
        "Division: 15 / 3 = 5.0",
        "Power: 2 ^ 8 = 256",
        "Square root: √25 = 5.0",
    ];
    for (line, message) in lines.iter().zip(expected) {
        assert!(line.contains(" INFO "), "not an INFO record: {line}");
        assert!(line.ends_with(message), "{line:?} does not end with {message:?}");
    }
}

#[test]
fn records_are_timestamped() {
    let logs = with_captured_logs(|| {
        Calculator::new().add(1, 1);
    });

    let line = logs.lines().pop().expect("one record");
    let timestamp = line.split_whitespace().next().expect("timestamp field");
    assert!(timestamp.contains('T'), "unexpected timestamp: {timestamp}");
    assert!(timestamp.chars().next().is_some_and(|c| c.is_ascii_digit()));
}

#[test]
fn rejected_input_is_logged_at_error() {
    let logs = with_captured_logs(|| {
        let calc = Calculator::new();
        assert!(calc.divide(10, 0).is_err());
        assert!(calc.square_root(-4).is_err());
    });

    let lines = logs.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].ends_with("Division by zero attempted"));
    assert!(lines[1].contains("ERROR"));
    assert!(lines[1].ends_with("Square root of negative number attempted"));
}

#[test]
fn pure_functions_do_not_log() {
    let logs = with_captured_logs(|| {
        calculator::arithmetic::add(5.into(), 3.into());
        let _ = calculator::arithmetic::divide(1.into(), 0.into());
    });

    assert!(logs.contents().is_empty());
}
