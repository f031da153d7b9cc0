//! Unev Expr - expression trees and the construction surface.
//!
//! Expressions are built purely by composition:
//!
//! ```
//! use unev_expr::var;
//!
//! let foo = var("foo");
//! let bar = var("bar");
//! let expr = (foo + bar - 1) / 2;
//! ```
//!
//! Composite nodes only come into existence through the checked constructors
//! (`try_unary` / `try_binary`) or the operator overloads that wrap them; an
//! operator applied to operand types that cannot support it is rejected at
//! construction, never at evaluation. Combining two plain literals performs
//! the operation immediately and yields a literal node.

mod build;
mod expr;
mod ops;

pub use build::{try_binary, try_unary, var, var_of, ConstructError};
pub use expr::{Expr, Literal};

// Re-exported so `var!` and downstream callers need only this crate.
pub use unev_ir::{BinaryOp, Name, Ty, UnaryOp};

/// Create a variable from a bare name token.
///
/// `var!(block_size)` is equivalent to `var("block_size")` (declared type
/// int); `var!(ratio: Float)` declares an explicit type.
#[macro_export]
macro_rules! var {
    ($name:ident) => {
        $crate::var(stringify!($name))
    };
    ($name:ident : $ty:ident) => {
        $crate::var_of(stringify!($name), $crate::Ty::$ty)
    };
}
