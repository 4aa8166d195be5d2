//! Number crunching behind `Square` and `Evaluate`.
//!
//! Squaring runs in exact decimal arithmetic so that `0.1²` is `0.01`;
//! evaluation runs in `f64`, and results are rendered as the shortest
//! round-trip decimal.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculator::operation::Operation;

/// Shown in place of a result when dividing by zero.
pub const ERROR_MARKER: &str = "Error";

const MAX_MANTISSA: u128 = (1 << 96) - 1;

/// True for `-?digits[.digits]` with at least one digit, e.g. `12`, `0.`,
/// `-3.25`. Markers such as `Error` or `NaN` are not literals.
pub fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut points = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Square of an operand, or `None` if the operand is not a numeric literal.
///
/// Falls back to `f64` when the square cannot be held exactly in a
/// [`Decimal`]: more than 28 fractional digits, or a mantissa wider than
/// 96 bits. `Decimal` would otherwise round the product silently, so a
/// tiny operand would square to `0`.
pub fn square(operand: &str) -> Option<String> {
    if !is_numeric_literal(operand) {
        return None;
    }
    let literal = operand.strip_suffix('.').unwrap_or(operand);
    match exact_square(literal) {
        Some(squared) => Some(squared.normalize().to_string()),
        None => {
            let value = parse_float(Some(literal));
            Some(format_float(value * value))
        }
    }
}

fn exact_square(literal: &str) -> Option<Decimal> {
    let value = Decimal::from_str(literal).ok()?;
    let mantissa = value.mantissa().unsigned_abs();
    let fits = value.scale() * 2 <= Decimal::MAX_SCALE
        && mantissa
            .checked_mul(mantissa)
            .is_some_and(|product| product <= MAX_MANTISSA);
    if !fits {
        return None;
    }
    value.checked_mul(value)
}

/// Applies `operation` to the two operands.
///
/// Absent or malformed operands read as NaN. Dividing by zero yields
/// [`ERROR_MARKER`].
pub fn evaluate(previous: Option<&str>, operation: Operation, current: Option<&str>) -> String {
    let lhs = parse_float(previous);
    let rhs = parse_float(current);
    let result = match operation {
        Operation::Add => lhs + rhs,
        Operation::Subtract => lhs - rhs,
        Operation::Multiply => lhs * rhs,
        Operation::Divide => {
            if rhs == 0.0 {
                return ERROR_MARKER.to_string();
            }
            lhs / rhs
        }
    };
    format_float(result)
}

fn parse_float(operand: Option<&str>) -> f64 {
    operand
        .map(|text| text.strip_suffix('.').unwrap_or(text))
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Renders without exponent; `-0` collapses to `0`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literals() {
        assert!(is_numeric_literal("0"));
        assert!(is_numeric_literal("12."));
        assert!(is_numeric_literal("-3.25"));
        assert!(!is_numeric_literal("."));
        assert!(!is_numeric_literal("-"));
        assert!(!is_numeric_literal("1.2.3"));
        assert!(!is_numeric_literal("Error"));
        assert!(!is_numeric_literal("NaN"));
    }

    #[test]
    fn square_is_exact_for_decimals() {
        assert_eq!(square("0.1").as_deref(), Some("0.01"));
        assert_eq!(square("1.5").as_deref(), Some("2.25"));
        assert_eq!(square("-4").as_deref(), Some("16"));
        assert_eq!(square("12.").as_deref(), Some("144"));
    }

    #[test]
    fn square_of_marker_is_none() {
        assert_eq!(square("Error"), None);
        assert_eq!(square("Infinity"), None);
    }

    #[test]
    fn square_overflow_falls_back_to_float() {
        assert_eq!(
            square("100000000000000000").as_deref(),
            Some("10000000000000000000000000000000000")
        );
    }

    #[test]
    fn square_beyond_decimal_scale_stays_nonzero() {
        let squared = square("0.000000000000001").unwrap();
        assert_ne!(squared, "0");
        assert!(squared.starts_with("0.000000000000000000000000000"));
        let value: f64 = squared.parse().unwrap();
        assert!((value - 1e-30).abs() < 1e-40);
    }

    #[test]
    fn square_within_decimal_limits_stays_exact() {
        assert_eq!(square("12345678.9").as_deref(), Some("152415787501905.21"));
    }

    #[test]
    fn evaluate_basic_operations() {
        assert_eq!(evaluate(Some("3"), Operation::Add, Some("5")), "8");
        assert_eq!(evaluate(Some("3"), Operation::Subtract, Some("5")), "-2");
        assert_eq!(evaluate(Some("2.5"), Operation::Multiply, Some("4")), "10");
        assert_eq!(evaluate(Some("7"), Operation::Divide, Some("2")), "3.5");
    }

    #[test]
    fn evaluate_keeps_float_rounding() {
        assert_eq!(
            evaluate(Some("0.1"), Operation::Add, Some("0.2")),
            "0.30000000000000004"
        );
    }

    #[test]
    fn divide_by_zero_is_error() {
        assert_eq!(evaluate(Some("9"), Operation::Divide, Some("0")), ERROR_MARKER);
        assert_eq!(evaluate(Some("9"), Operation::Divide, Some("0.")), ERROR_MARKER);
        assert_eq!(evaluate(Some("9"), Operation::Divide, Some("-0")), ERROR_MARKER);
    }

    #[test]
    fn missing_operand_is_nan() {
        assert_eq!(evaluate(Some("9"), Operation::Add, None), "NaN");
        assert_eq!(evaluate(Some("Error"), Operation::Multiply, Some("2")), "NaN");
    }

    #[test]
    fn non_finite_rendering() {
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_float(-0.0), "0");
        assert_eq!(format_float(1e21), "1000000000000000000000");
    }
}
