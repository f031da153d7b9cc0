//! Unary operator kernels.
//!
//! Direct enum-based dispatch for unary operations, mirroring the binary
//! kernel in `operators`.

use unev_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op_for, EvalResult};
use crate::Value;

/// Evaluate a unary operation using direct pattern matching.
///
/// Unary plus is identity-like but still dispatches through the value's own
/// operation, so unsupported types (bool, str, tuple) are rejected rather
/// than passed through.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        // Unary plus
        (Value::Int(n), UnaryOp::Plus) => Ok(Value::Int(*n)),
        (Value::Float(f), UnaryOp::Plus) => Ok(Value::Float(*f)),

        // Numeric negation
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),

        // Bitwise not
        (Value::Int(n), UnaryOp::BitNot) => Ok(Value::Int(!n)),

        // Invalid combinations
        _ => Err(invalid_unary_op_for(value.type_name(), op)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn plus_is_identity_on_numbers() {
        assert_eq!(evaluate_unary(Value::int(13), UnaryOp::Plus), Ok(Value::int(13)));
        assert_eq!(
            evaluate_unary(Value::float(2.5), UnaryOp::Plus),
            Ok(Value::float(2.5))
        );
    }

    #[test]
    fn negation() {
        assert_eq!(evaluate_unary(Value::int(13), UnaryOp::Neg), Ok(Value::int(-13)));
        assert_eq!(
            evaluate_unary(Value::float(1.5), UnaryOp::Neg),
            Ok(Value::float(-1.5))
        );
    }

    #[test]
    fn negation_overflow() {
        let err = evaluate_unary(Value::int(i64::MIN), UnaryOp::Neg).unwrap_err();
        assert_eq!(
            *err.kind(),
            EvalErrorKind::IntegerOverflow {
                operation: "negation"
            }
        );
    }

    #[test]
    fn bitwise_not() {
        assert_eq!(
            evaluate_unary(Value::int(13), UnaryOp::BitNot),
            Ok(Value::int(!13))
        );
    }

    #[test]
    fn unsupported_types_are_rejected() {
        let err = evaluate_unary(Value::Bool(true), UnaryOp::Neg).unwrap_err();
        assert_eq!(
            *err.kind(),
            EvalErrorKind::InvalidUnaryOp {
                type_name: "bool",
                op: UnaryOp::Neg
            }
        );
        let err = evaluate_unary(Value::string("s"), UnaryOp::Plus).unwrap_err();
        assert_eq!(
            *err.kind(),
            EvalErrorKind::InvalidUnaryOp {
                type_name: "str",
                op: UnaryOp::Plus
            }
        );
    }
}
