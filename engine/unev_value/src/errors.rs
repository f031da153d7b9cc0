//! Evaluation error types and constructors.
//!
//! `EvalErrorKind` gives every failure a typed category so callers can match
//! on the kind instead of parsing message strings. Factory functions (e.g.
//! `division_by_zero()`) are the public construction API; they populate both
//! the kind and, through `Display`, the message.

use std::fmt;

use unev_ir::{BinaryOp, Name, Ty, UnaryOp};

/// Result of evaluation.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Variable resolution
    UndefinedVariable {
        name: Name,
    },
    TypeMismatch {
        name: Name,
        expected: Ty,
        got: Ty,
    },

    // Operator dispatch. Unreachable through trees built by the checked
    // constructors; kept because the kernels are callable on raw values.
    InvalidBinaryOp {
        type_name: &'static str,
        op: BinaryOp,
    },
    InvalidUnaryOp {
        type_name: &'static str,
        op: UnaryOp,
    },
    BinaryTypeMismatch {
        left: &'static str,
        right: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::TypeMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "variable {name} is declared {expected} but is bound to {got}"
                )
            }
            Self::InvalidBinaryOp { type_name, op } => {
                write!(
                    f,
                    "operator `{}` cannot be applied to {type_name}",
                    op.as_symbol()
                )
            }
            Self::InvalidUnaryOp { type_name, op } => {
                write!(
                    f,
                    "unary `{}` cannot be applied to {type_name}",
                    op.as_symbol()
                )
            }
            Self::BinaryTypeMismatch { left, right } => {
                write!(f, "cannot apply operator to `{left}` and `{right}`")
            }
        }
    }
}

/// Evaluation error.
///
/// Any failure aborts the whole evaluation; there are no retries and no
/// partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    /// Wrap a kind into an error.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// The typed category of this error.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// Whether this is an arithmetic fault (division/modulo by zero,
    /// overflow).
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self.kind,
            EvalErrorKind::DivisionByZero
                | EvalErrorKind::ModuloByZero
                | EvalErrorKind::IntegerOverflow { .. }
        )
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow in the named operation.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

/// A variable reference had no active binding in the environment.
#[cold]
pub fn undefined_variable(name: impl Into<Name>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable { name: name.into() })
}

/// A bound value's runtime type disagrees with the variable's declared type.
#[cold]
pub fn type_mismatch(name: impl Into<Name>, expected: Ty, got: Ty) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        name: name.into(),
        expected,
        got,
    })
}

/// An operator was applied to a type that does not support it.
#[cold]
pub fn invalid_binary_op_for(type_name: &'static str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { type_name, op })
}

/// A unary operator was applied to a type that does not support it.
#[cold]
pub fn invalid_unary_op_for(type_name: &'static str, op: UnaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp { type_name, op })
}

/// A binary operator was applied across two different types.
#[cold]
pub fn binary_type_mismatch(left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(division_by_zero().to_string(), "division by zero");
        assert_eq!(
            undefined_variable("missing").to_string(),
            "undefined variable: missing"
        );
        assert_eq!(
            type_mismatch("foo", Ty::Int, Ty::Str).to_string(),
            "variable foo is declared int but is bound to str"
        );
        assert_eq!(
            invalid_binary_op_for("bool", BinaryOp::Add).to_string(),
            "operator `+` cannot be applied to bool"
        );
    }

    #[test]
    fn arithmetic_classification() {
        assert!(modulo_by_zero().is_arithmetic());
        assert!(integer_overflow("negation").is_arithmetic());
        assert!(!undefined_variable("x").is_arithmetic());
    }

    #[test]
    fn kind_is_matchable() {
        let err = undefined_variable("missing");
        assert!(matches!(
            err.kind(),
            EvalErrorKind::UndefinedVariable { name } if *name == "missing"
        ));
    }
}
