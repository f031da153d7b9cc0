//! Expression tree.
//!
//! `Expr` is an immutable tree built once by composition and never mutated.
//! Children are exclusively owned boxes: no sharing, no back-references, no
//! cycles. Evaluating or formatting a tree is read-only, so the same tree can
//! be used from multiple threads without guards.

use std::fmt;
use std::sync::Arc;

use unev_ir::{BinaryOp, Name, Ty, UnaryOp};
use unev_value::Value;

/// A scalar literal embedded in an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(Arc<str>),
}

impl Literal {
    /// The runtime type tag of this literal.
    pub fn ty(&self) -> Ty {
        match self {
            Literal::Int(_) => Ty::Int,
            Literal::Float(_) => Ty::Float,
            Literal::Bool(_) => Ty::Bool,
            Literal::Str(_) => Ty::Str,
        }
    }

    /// Convert a scalar value back into a literal.
    ///
    /// Returns `None` for tuples, which are represented structurally as
    /// `Expr::Tuple`, never as a scalar literal.
    pub fn from_value(value: Value) -> Option<Literal> {
        match value {
            Value::Int(n) => Some(Literal::Int(n)),
            Value::Float(f) => Some(Literal::Float(f)),
            Value::Bool(b) => Some(Literal::Bool(b)),
            Value::Str(s) => Some(Literal::Str(s)),
            Value::Tuple(_) => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Value {
        match literal {
            Literal::Int(n) => Value::Int(n),
            Literal::Float(f) => Value::Float(f),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Str(s) => Value::Str(s),
        }
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Literal::Float(f)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(Arc::from(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(Arc::from(s))
    }
}

impl fmt::Display for Literal {
    /// Matches `Value`'s natural textual representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// An unevaluated expression.
///
/// Variants are public so other crates can match on the tree. Building a
/// composite variant directly bypasses the type check in `try_unary` /
/// `try_binary`: an unsupported operator/operand combination assembled that
/// way is only caught by the value kernels at evaluation time, as
/// `InvalidUnaryOp` / `InvalidBinaryOp`. Go through the checked constructors
/// or the operator overloads to keep rejection at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A plain value; evaluates to itself.
    Literal(Literal),
    /// A structured literal of further expressions; evaluates to a tuple of
    /// the recursive evaluation of its elements.
    Tuple(Vec<Expr>),
    /// A named placeholder, resolved against an environment at evaluation
    /// time. The declared type is checked against the bound value then.
    Variable { name: Name, ty: Ty },
    /// A deferred unary operation. Exclusively owns its operand.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A deferred binary operation. Exclusively owns both children. Never
    /// built over two literals; those fold eagerly at construction.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Create a literal node.
    pub fn literal(value: impl Into<Literal>) -> Expr {
        Expr::Literal(value.into())
    }

    /// Create a structured (tuple) literal node.
    pub fn tuple(elements: Vec<Expr>) -> Expr {
        Expr::Tuple(elements)
    }

    /// The statically determined result type of this expression.
    ///
    /// Total: every supported operator's result type equals its (left)
    /// operand's type, so no table lookup can fail here.
    pub fn ty(&self) -> Ty {
        match self {
            Expr::Literal(literal) => literal.ty(),
            Expr::Tuple(_) => Ty::Tuple,
            Expr::Variable { ty, .. } => *ty,
            Expr::Unary { operand, .. } => operand.ty(),
            Expr::Binary { left, .. } => left.ty(),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Expr {
        Expr::Literal(literal)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Expr {
        Expr::literal(n)
    }
}

impl From<f64> for Expr {
    fn from(f: f64) -> Expr {
        Expr::literal(f)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Expr {
        Expr::literal(b)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Expr {
        Expr::literal(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Expr {
        Expr::literal(s)
    }
}
