//! Operator overloads.
//!
//! The ergonomic construction surface: `-`, `!` (bitwise not), `+`, `-`,
//! `*`, `/`, `%` over expressions and over mixed expression/scalar operands.
//! Every overload requires at least one `Expr` operand by construction; two
//! native scalars never enter the crate, the host language computes them
//! directly.
//!
//! Overloads delegate to the checked constructors in `build`. `std::ops`
//! signatures cannot return a `Result`, so an operand combination the type
//! table rejects panics at construction with the `ConstructError` message;
//! `try_unary` / `try_binary` are the non-panicking equivalents. Rust has no
//! unary `+` operator, so unary plus is the `plus` method.

use std::ops;

use unev_ir::{BinaryOp, UnaryOp};

use crate::build::{try_binary, try_unary, ConstructError};
use crate::expr::Expr;

fn built(result: Result<Expr, ConstructError>) -> Expr {
    match result {
        Ok(expr) => expr,
        Err(err) => panic!("invalid expression: {err}"),
    }
}

impl Expr {
    /// Unary plus. Identity-like, but dispatches through the value's own
    /// unary-plus operation at evaluation time.
    #[must_use]
    pub fn plus(self) -> Expr {
        built(try_unary(UnaryOp::Plus, self))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        built(try_unary(UnaryOp::Neg, self))
    }
}

/// Bitwise not, rendered as `~` by the formatter.
impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        built(try_unary(UnaryOp::BitNot, self))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr, [$($scalar:ty),*]) => {
        impl ops::$trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                built(try_binary($op, self, rhs))
            }
        }

        $(
            impl ops::$trait<$scalar> for Expr {
                type Output = Expr;

                fn $method(self, rhs: $scalar) -> Expr {
                    built(try_binary($op, self, Expr::from(rhs)))
                }
            }

            impl ops::$trait<Expr> for $scalar {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    built(try_binary($op, Expr::from(self), rhs))
                }
            }
        )*
    };
}

impl_binary_op!(Add, add, BinaryOp::Add, [i64, f64, &str]);
impl_binary_op!(Sub, sub, BinaryOp::Sub, [i64, f64]);
impl_binary_op!(Mul, mul, BinaryOp::Mul, [i64, f64]);
impl_binary_op!(Div, div, BinaryOp::Div, [i64, f64]);
impl_binary_op!(Rem, rem, BinaryOp::Mod, [i64]);
