use std::cmp::Ordering;
use std::fmt::{self, Display};

use num_traits::{checked_pow, Pow, ToPrimitive, Zero};

/// A numeric value that is either an integer or a floating-point number.
///
/// Arithmetic on two integers stays integral as long as the result fits into
/// an `i64`. As soon as one operand is a float, or the integer result would
/// overflow, the computation is carried out on `f64`s instead.
///
/// Note that we can't derive `PartialEq` because values with different
/// representations can still be equal (e.g. `5` and `5.0`).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Integer(a), Number::Float(b)) => cmp_integer_float(a, b),
            (Number::Float(a), Number::Integer(b)) => {
                cmp_integer_float(b, a).map(Ordering::reverse)
            }
        }
    }
}

/// Compares without rounding `i` to the nearest `f64`, which would make
/// `2^53 + 1` equal to `2^53 as f64`.
fn cmp_integer_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, exactly representable
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        None
    } else if f >= BOUND {
        Some(Ordering::Less)
    } else if f < -BOUND {
        Some(Ordering::Greater)
    } else {
        let whole = f.trunc();
        // in range, so the cast is exact
        match i.cmp(&(whole as i64)) {
            Ordering::Equal => whole.partial_cmp(&f),
            ordering => Some(ordering),
        }
    }
}

impl Number {
    pub fn from_f64(n: f64) -> Self {
        Number::Float(n)
    }

    pub fn from_i64(n: i64) -> Self {
        Number::Integer(n)
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// Whether this value is stored as an integer. `5.0` is not.
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Integer(n) => n < 0,
            // -0.0 and NaN are not negative
            Number::Float(n) => n < 0.0,
        }
    }

    pub fn abs(self) -> Self {
        match self {
            Number::Integer(n) => n
                .checked_abs()
                .map(Number::Integer)
                .unwrap_or_else(|| Number::Float((n as f64).abs())),
            Number::Float(n) => Number::Float(n.abs()),
        }
    }

    pub fn pow(self, exponent: Number) -> Self {
        if let (Number::Integer(base), Number::Integer(exp)) = (self, exponent) {
            if let Some(result) = exp.to_usize().and_then(|exp| checked_pow(base, exp)) {
                return Number::Integer(result);
            }
        }
        Number::Float(self.to_f64().pow(exponent.to_f64()))
    }

    pub fn sqrt(self) -> Self {
        Number::Float(self.to_f64().sqrt())
    }

    fn integer_op(
        self,
        rhs: Self,
        checked: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Self {
        if let (Number::Integer(a), Number::Integer(b)) = (self, rhs) {
            if let Some(result) = checked(a, b) {
                return Number::Integer(result);
            }
        }
        Number::Float(float(self.to_f64(), rhs.to_f64()))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Integer(0)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Number::Integer(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }
}

/// Writes a float in exponent notation with a signed, at least two-digit
/// exponent: `1e+16`, `1.5e-05`.
fn fmt_exponential(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{n:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match *self {
            Number::Integer(n) => return write!(f, "{n}"),
            Number::Float(n) => n,
        };

        if n.is_nan() {
            write!(f, "nan")
        } else if n.is_infinite() {
            write!(f, "{}inf", if n < 0.0 { "-" } else { "" })
        } else if n != 0.0 && !(1e-4..1e16).contains(&n.abs()) {
            fmt_exponential(f, n)
        } else {
            let formatted = n.to_string();
            if formatted.contains('.') {
                write!(f, "{formatted}")
            } else {
                write!(f, "{formatted}.0")
            }
        }
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        self.integer_op(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl std::ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Self::Output {
        self.integer_op(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        self.integer_op(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// Always produces a float, `Number::Integer(15) / Number::Integer(3)` is `5.0`.
impl std::ops::Div for Number {
    type Output = Number;

    fn div(self, rhs: Self) -> Self::Output {
        Number::Float(self.to_f64() / rhs.to_f64())
    }
}

#[test]
fn test_display() {
    assert_eq!(Number::from(8).to_string(), "8");
    assert_eq!(Number::from(-15).to_string(), "-15");
    assert_eq!(Number::from(5.0).to_string(), "5.0");
    assert_eq!(Number::from(-3.0).to_string(), "-3.0");
    assert_eq!(Number::from(0.0).to_string(), "0.0");
    assert_eq!(Number::from(3.5).to_string(), "3.5");
    assert_eq!(Number::from(0.1 + 0.2).to_string(), "0.30000000000000004");
    assert_eq!(Number::from(0.001).to_string(), "0.001");
    assert_eq!(Number::from(1e16).to_string(), "1e+16");
    assert_eq!(Number::from(-1.5e20).to_string(), "-1.5e+20");
    assert_eq!(Number::from(1.5e-5).to_string(), "1.5e-05");
    assert_eq!(Number::from(1e-100).to_string(), "1e-100");
    assert_eq!(Number::from(f64::NAN).to_string(), "nan");
    assert_eq!(Number::from(f64::INFINITY).to_string(), "inf");
    assert_eq!(Number::from(f64::NEG_INFINITY).to_string(), "-inf");
}

#[test]
fn test_equality_across_representations() {
    assert_eq!(Number::from(5), Number::from(5.0));
    assert_ne!(Number::from(5), Number::from(5.5));
    assert!(Number::from(2) < Number::from(2.5));
    assert!(Number::from(-1.0) < Number::from(0));
}

#[test]
fn test_mixed_comparison_is_exact() {
    let two_pow_53 = 1i64 << 53;
    let above = Number::from(two_pow_53 + 1);
    let rounded = Number::from(two_pow_53 as f64);

    assert_ne!(above, rounded);
    assert_eq!(above.partial_cmp(&rounded), Some(Ordering::Greater));
    assert_eq!(rounded.partial_cmp(&above), Some(Ordering::Less));
    assert_eq!(Number::from(two_pow_53), rounded);

    assert!(Number::from(i64::MAX) < Number::from(9.223372036854775808e18));
    assert!(Number::from(i64::MIN) == Number::from(-9.223372036854775808e18));
    assert!(Number::from(i64::MIN) > Number::from(-1e19));
    assert!(Number::from(3) < Number::from(3.5));
    assert!(Number::from(-3) > Number::from(-3.5));
    assert!(Number::from(0) == Number::from(-0.0));
    assert!(Number::from(i64::MAX) < Number::from(f64::INFINITY));
    assert!(Number::from(i64::MIN) > Number::from(f64::NEG_INFINITY));

    assert_ne!(Number::from(0), Number::from(f64::NAN));
    assert_eq!(Number::from(0).partial_cmp(&Number::from(f64::NAN)), None);
}

#[test]
fn test_integer_arithmetic_stays_integral() {
    assert!((Number::from(5) + Number::from(3)).is_integer());
    assert!((Number::from(5) - Number::from(3)).is_integer());
    assert!((Number::from(5) * Number::from(3)).is_integer());
    assert!(!(Number::from(15) / Number::from(3)).is_integer());
    assert!(!(Number::from(5) + Number::from(0.5)).is_integer());
}

#[test]
fn test_overflow_falls_back_to_float() {
    let sum = Number::from(i64::MAX) + Number::from(1);
    assert!(!sum.is_integer());
    assert_eq!(sum.to_f64(), 9.223372036854775808e18);

    let product = Number::from(i64::MAX) * Number::from(2);
    assert!(!product.is_integer());

    assert!(!Number::from(i64::MIN).abs().is_integer());
}

#[test]
fn test_pow() {
    assert_eq!(Number::from(2).pow(Number::from(8)), Number::from(256));
    assert!(Number::from(2).pow(Number::from(8)).is_integer());
    assert!(Number::from(2).pow(Number::from(64)).to_f64() > 1e19);
    assert!(!Number::from(2).pow(Number::from(-2)).is_integer());
    assert!(Number::from(-8).pow(Number::from(0.5)).to_f64().is_nan());
}

#[test]
fn test_abs_and_sign() {
    assert_eq!(Number::from(-1.0).abs(), Number::from(1.0));
    assert_eq!(Number::from(-7).abs(), Number::from(7));
    assert!(Number::from(-0.5).is_negative());
    assert!(!Number::from(-0.0).is_negative());
    assert!(!Number::from(f64::NAN).is_negative());
    assert!(Number::from(-0.0).is_zero());
    assert!(Number::zero().is_integer());
}
