use approx::assert_relative_eq;
use calculator::{Calculator, CalculatorError, ErrorKind, Number};

#[test]
fn demo_scenarios() {
    let calc = Calculator::new();

    assert_eq!(calc.add(5, 3), Number::from(8));
    assert_eq!(calc.subtract(10, 4), Number::from(6));
    assert_eq!(calc.multiply(6, 7), Number::from(42));
    assert_eq!(calc.divide(15, 3), Ok(Number::from(5)));
    assert_eq!(calc.power(2, 8), Number::from(256));
    assert_eq!(calc.square_root(25), Ok(Number::from(5.0)));
}

#[test]
fn combined_calculation() {
    let calc = Calculator::new();

    // (5 + 3) * 2
    let sum = calc.add(5, 3);
    assert_eq!(calc.multiply(sum, 2), Number::from(16));
}

#[test]
fn calculation_chain() {
    let calc = Calculator::new();

    let mut result = Number::from(10);
    result = calc.add(result, 5);
    result = calc.subtract(result, 3);
    result = calc.multiply(result, 2);
    result = calc.divide(result, 4).unwrap();

    assert_eq!(result, Number::from(6));
    assert_eq!(result.to_string(), "6.0");
}

#[test]
fn power_and_square_root() {
    let calc = Calculator::new();

    let squared = calc.power(3, 2);
    let root = calc.square_root(squared).unwrap();
    assert_relative_eq!(root.to_f64(), 3.0);
}

#[test]
fn invalid_arguments() {
    let calc = Calculator::new();

    for a in [-5.0, 0.0, 1.0, 1e300, f64::INFINITY] {
        let err = calc.divide(a, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    for n in [-1e-12, -1.0, -4.0, f64::NEG_INFINITY] {
        let err = calc.square_root(n).unwrap_err();
        assert_eq!(err, CalculatorError::SquareRootOfNegativeNumber);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn negative_base_with_fractional_exponent_is_nan() {
    let calc = Calculator::new();
    assert!(calc.power(-8, 1.0 / 3.0).to_f64().is_nan());
}

#[test]
fn large_integer_results_compare_exactly() {
    let calc = Calculator::new();

    let sum = calc.add(1i64 << 53, 1);
    assert!(sum.is_integer());
    assert_ne!(sum, Number::from((1i64 << 53) as f64));
    assert!(sum > Number::from((1i64 << 53) as f64));
}
