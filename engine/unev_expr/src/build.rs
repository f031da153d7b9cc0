//! Checked expression construction.
//!
//! `try_unary` and `try_binary` are the only way composite nodes come into
//! existence. They check the operator against the would-be-evaluated types of
//! the operands at construction time, so an expression that cannot be valid
//! for any environment is rejected before it can ever reach `evaluate`.
//!
//! When every operand is already a plain literal there is nothing to defer:
//! the operation is performed immediately through the same value kernels the
//! evaluator uses, and the result is a literal node. A fold that faults
//! (`literal(7) / literal(0)`) is therefore a construction error too.

use std::fmt;

use unev_ir::{BinaryOp, Name, Ty, UnaryOp};
use unev_value::{evaluate_binary, evaluate_unary, EvalError, Value};

use crate::expr::{Expr, Literal};

/// Error rejecting an expression at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructError {
    /// The operand's evaluated type does not support the unary operator.
    UnsupportedUnary { op: UnaryOp, operand: Ty },
    /// The operands' evaluated types do not support the binary operator
    /// (unsupported type, or two different types).
    UnsupportedBinary { op: BinaryOp, left: Ty, right: Ty },
    /// Eager evaluation of an all-literal operation faulted.
    Fold(EvalError),
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedUnary { op, operand } => {
                write!(
                    f,
                    "unary `{}` cannot be applied to an expression of type {operand}",
                    op.as_symbol()
                )
            }
            Self::UnsupportedBinary { op, left, right } => {
                write!(
                    f,
                    "operator `{}` cannot be applied to expressions of types {left} and {right}",
                    op.as_symbol()
                )
            }
            Self::Fold(err) => write!(f, "literal operation failed: {err}"),
        }
    }
}

impl std::error::Error for ConstructError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fold(err) => Some(err),
            _ => None,
        }
    }
}

/// Create a variable with the default type (int).
pub fn var(name: impl Into<Name>) -> Expr {
    var_of(name, Ty::default())
}

/// Create a variable with an explicit declared type.
pub fn var_of(name: impl Into<Name>, ty: Ty) -> Expr {
    Expr::Variable {
        name: name.into(),
        ty,
    }
}

/// Build a unary node, checking the operator against the operand's evaluated
/// type.
///
/// A literal operand is computed immediately and yields a literal node; a
/// unary node over a literal is never built.
pub fn try_unary(op: UnaryOp, operand: Expr) -> Result<Expr, ConstructError> {
    let operand_ty = operand.ty();
    if op.result_ty(operand_ty).is_none() {
        return Err(ConstructError::UnsupportedUnary {
            op,
            operand: operand_ty,
        });
    }
    match operand {
        Expr::Literal(literal) => fold_literal(evaluate_unary(Value::from(literal), op)),
        operand => Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        }),
    }
}

/// Build a binary node, checking the operator against both operands'
/// evaluated types.
///
/// Two literal operands are combined immediately and yield a literal node; a
/// binary node over two literals is never built.
pub fn try_binary(op: BinaryOp, left: Expr, right: Expr) -> Result<Expr, ConstructError> {
    let (left_ty, right_ty) = (left.ty(), right.ty());
    if op.result_ty(left_ty, right_ty).is_none() {
        return Err(ConstructError::UnsupportedBinary {
            op,
            left: left_ty,
            right: right_ty,
        });
    }
    match (left, right) {
        (Expr::Literal(a), Expr::Literal(b)) => {
            fold_literal(evaluate_binary(Value::from(a), Value::from(b), op))
        }
        (left, right) => Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }),
    }
}

/// Convert a kernel result back into a literal node.
fn fold_literal(result: Result<Value, EvalError>) -> Result<Expr, ConstructError> {
    let value = result.map_err(ConstructError::Fold)?;
    match Literal::from_value(value) {
        Some(literal) => Ok(Expr::Literal(literal)),
        // Kernels only produce scalars for scalar operands.
        None => unreachable!("literal fold produced a non-scalar value"),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unev_value::EvalErrorKind;

    #[test]
    fn variables_default_to_int() {
        let foo = var("foo");
        assert_eq!(foo.ty(), Ty::Int);
        assert!(matches!(foo, Expr::Variable { ref name, .. } if *name == "foo"));
    }

    #[test]
    fn unary_over_a_variable_defers() {
        let expr = try_unary(UnaryOp::Neg, var("foo")).unwrap();
        assert!(matches!(expr, Expr::Unary { op: UnaryOp::Neg, .. }));
    }

    #[test]
    fn unary_over_a_literal_folds() {
        let expr = try_unary(UnaryOp::Neg, Expr::literal(13i64)).unwrap();
        assert_eq!(expr, Expr::literal(-13i64));
    }

    #[test]
    fn two_literals_fold_instead_of_building_a_node() {
        let expr = try_binary(BinaryOp::Add, Expr::literal(7i64), Expr::literal(6i64)).unwrap();
        assert_eq!(expr, Expr::literal(13i64));
    }

    #[test]
    fn one_variable_operand_defers() {
        let expr = try_binary(BinaryOp::Add, Expr::literal(7i64), var("foo")).unwrap();
        assert!(matches!(expr, Expr::Binary { op: BinaryOp::Add, .. }));
    }

    #[test]
    fn unsupported_operator_is_rejected_at_construction() {
        let err = try_unary(UnaryOp::BitNot, var_of("x", Ty::Float)).unwrap_err();
        assert_eq!(
            err,
            ConstructError::UnsupportedUnary {
                op: UnaryOp::BitNot,
                operand: Ty::Float
            }
        );

        let err = try_binary(BinaryOp::Mod, var_of("x", Ty::Float), Expr::literal(2.0)).unwrap_err();
        assert_eq!(
            err,
            ConstructError::UnsupportedBinary {
                op: BinaryOp::Mod,
                left: Ty::Float,
                right: Ty::Float
            }
        );
    }

    #[test]
    fn mixed_operand_types_are_rejected_at_construction() {
        let err = try_binary(BinaryOp::Add, var("n"), Expr::literal(1.0)).unwrap_err();
        assert_eq!(
            err,
            ConstructError::UnsupportedBinary {
                op: BinaryOp::Add,
                left: Ty::Int,
                right: Ty::Float
            }
        );
    }

    #[test]
    fn faulting_fold_is_a_construction_error() {
        let err = try_binary(BinaryOp::Div, Expr::literal(7i64), Expr::literal(0i64)).unwrap_err();
        match err {
            ConstructError::Fold(inner) => {
                assert_eq!(*inner.kind(), EvalErrorKind::DivisionByZero);
            }
            other => panic!("expected a fold error, got {other:?}"),
        }
    }

    #[test]
    fn string_literals_concatenate_eagerly() {
        let expr = try_binary(BinaryOp::Add, Expr::literal("foo"), Expr::literal("bar")).unwrap();
        assert_eq!(expr, Expr::literal("foobar"));
    }
}
