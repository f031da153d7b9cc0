//! The evaluator.
//!
//! A single pure top-down pass over an expression tree: no state machine, no
//! retries, no partial results. Any failure aborts the whole evaluation and
//! is surfaced to the caller as an `EvalError`.

use unev_expr::Expr;
use unev_value::{evaluate_binary, evaluate_unary, type_mismatch, EvalResult, Value};

use crate::Environment;

/// Evaluate an expression against an environment.
///
/// - Literals evaluate to themselves; tuple literals evaluate each element
///   independently and rebuild the tuple.
/// - Variables are looked up by name; a missing binding fails with
///   `UndefinedVariable`, a binding whose runtime type disagrees with the
///   variable's declared type fails with `TypeMismatch`.
/// - Unary and binary nodes evaluate their children, then dispatch to the
///   value kernels. Integer arithmetic is checked; division and modulus by
///   zero are errors.
///
/// Evaluation is referentially transparent: the same expression and the same
/// environment value always produce the same result.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult {
    match expr {
        Expr::Literal(literal) => Ok(Value::from(literal.clone())),
        Expr::Tuple(elements) => elements
            .iter()
            .map(|element| evaluate(element, env))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::tuple),
        Expr::Variable { name, ty } => {
            let value = env.get(name)?;
            if value.ty() != *ty {
                return Err(type_mismatch(name, *ty, value.ty()));
            }
            Ok(value.clone())
        }
        Expr::Unary { op, operand } => evaluate_unary(evaluate(operand, env)?, *op),
        Expr::Binary { op, left, right } => {
            evaluate_binary(evaluate(left, env)?, evaluate(right, env)?, *op)
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unev_expr::{var, var_of, Ty};
    use unev_value::EvalErrorKind;

    #[test]
    fn literal_is_identity() {
        let env = Environment::empty();
        assert_eq!(evaluate(&Expr::literal(42i64), &env), Ok(Value::int(42)));
    }

    #[test]
    fn variable_resolves_against_the_environment() {
        let env = Environment::empty().set("foo", 13);
        assert_eq!(evaluate(&var("foo"), &env), Ok(Value::int(13)));
    }

    #[test]
    fn missing_variable_fails() {
        let env = Environment::empty();
        let err = evaluate(&var("missing"), &env).unwrap_err();
        assert!(matches!(
            err.kind(),
            EvalErrorKind::UndefinedVariable { name } if *name == "missing"
        ));
    }

    #[test]
    fn declared_type_is_checked_against_the_bound_value() {
        let number = var_of("number", Ty::Float);
        let env = Environment::empty().set("number", "string");
        let err = evaluate(&number, &env).unwrap_err();
        assert_eq!(
            *err.kind(),
            EvalErrorKind::TypeMismatch {
                name: "number".into(),
                expected: Ty::Float,
                got: Ty::Str,
            }
        );
    }

    #[test]
    fn tuple_evaluates_each_element() {
        let env = Environment::empty().set("foo", 13);
        let shape = Expr::tuple(vec![var("foo"), var("foo") + 1]);
        assert_eq!(
            evaluate(&shape, &env),
            Ok(Value::tuple(vec![Value::int(13), Value::int(14)]))
        );
    }

    #[test]
    fn referential_transparency() {
        let env = Environment::empty().set("foo", 13).set("bar", 7);
        let expr = (var("foo") - var("bar")) * 2;
        let first = evaluate(&expr, &env);
        let second = evaluate(&expr, &env);
        assert_eq!(first, second);
        assert_eq!(first, Ok(Value::int(12)));
    }

    #[test]
    fn division_by_a_zero_bound_variable_fails() {
        let env = Environment::empty().set("foo", 0);
        let err = evaluate(&(7 / var("foo")), &env).unwrap_err();
        assert_eq!(*err.kind(), EvalErrorKind::DivisionByZero);
        assert!(err.is_arithmetic());
    }

    #[test]
    fn directly_built_invalid_nodes_fail_in_the_kernels() {
        // Assembling a variant by hand skips the construction-time check;
        // the kernel still rejects the combination with a typed error.
        let expr = Expr::Binary {
            op: unev_expr::BinaryOp::Add,
            left: Box::new(Expr::literal(true)),
            right: Box::new(Expr::literal(false)),
        };
        let err = evaluate(&expr, &Environment::empty()).unwrap_err();
        assert_eq!(
            *err.kind(),
            EvalErrorKind::InvalidBinaryOp {
                type_name: "bool",
                op: unev_expr::BinaryOp::Add
            }
        );
    }

    #[test]
    fn failure_aborts_the_whole_evaluation() {
        // the left subtree is fine; the right one has no binding
        let env = Environment::empty().set("foo", 13);
        let err = evaluate(&(var("foo") + var("missing")), &env).unwrap_err();
        assert!(matches!(
            err.kind(),
            EvalErrorKind::UndefinedVariable { .. }
        ));
    }
}
